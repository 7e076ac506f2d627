use std::path::PathBuf;
use swalign::core::scoring::scheme::ScoringScheme;
use swalign::engine::config::AlignmentConfig;

pub struct AppConfig {
    pub sequence1: String,
    pub sequence2: String,
    pub scheme: ScoringScheme,
    pub matrix_file: Option<PathBuf>,
    pub alignment: AlignmentConfig,
    pub show_progress: bool,
}
