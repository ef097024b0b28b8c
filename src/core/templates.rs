use crate::domain::model::TvMode;

/// An include file copied verbatim into `include/`.
#[derive(Debug, Clone, Copy)]
pub struct IncludeAsset {
    pub file_name: &'static str,
    pub contents: &'static str,
}

pub const INCLUDE_ASSETS: [IncludeAsset; 3] = [
    IncludeAsset {
        file_name: "vcs.h",
        contents: include_str!("../../assets/vcs.h"),
    },
    IncludeAsset {
        file_name: "macro.h",
        contents: include_str!("../../assets/macro.h"),
    },
    IncludeAsset {
        file_name: "tv_modes.h",
        contents: include_str!("../../assets/tv_modes.h"),
    },
];

const MAIN_SOURCE_TEMPLATE: &str = include_str!("../../assets/main.asm.tmpl");
const TV_MODE_PLACEHOLDER: &str = "{{TV_MODE}}";

pub const GITIGNORE_BODY: &str = "# Build outputs
build/
*.a26
*.bin
*.lst
*.sym

# Editor files
.vscode/
.idea/
*.swp
*~
";

pub fn render_main_source(tv_mode: TvMode) -> String {
    MAIN_SOURCE_TEMPLATE.replace(TV_MODE_PLACEHOLDER, tv_mode.symbol())
}
