mod model;
mod persistence;
mod settings;

pub use model::{
    ActionsConfig, DragConfig, LibraryConfig, ModalConfig, ProgressConfig, SurfaceConfig,
    TextConfig,
};
pub use persistence::{
    config_base_dir, config_path, load_config, load_config_from, save_config, save_config_to,
};
pub use settings::Settings;
