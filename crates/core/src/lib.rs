pub mod config;
pub mod decision;
pub mod language;
pub mod metrics;
pub mod model;
pub mod parser;
pub mod profiles;
pub mod quality;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ConfigProvider,
    ProperDownloadType,
};
pub use decision::{
    Decision, DecisionContext, DecisionEngine, DecisionServices, DecisionSpecification,
    DiskProvider, HistoryService, Rejection, RejectionReason, RejectionType, SearchCriteria,
};
pub use language::Language;
pub use model::{Episode, EpisodeFile, ReleaseInfo, RemoteEpisode, Series};
pub use parser::{ParsedEpisodeInfo, ParserError, TitleParser};
pub use quality::{Quality, QualityModel, Revision};
