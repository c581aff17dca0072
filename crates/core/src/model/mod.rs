//! Library and release entities the decision engine works on.

mod history;
mod release;
mod remote_episode;
mod series;

pub use history::{EpisodeHistory, EpisodeHistoryEventType};
pub use release::{DownloadProtocol, ReleaseInfo};
pub use remote_episode::RemoteEpisode;
pub use series::{Episode, EpisodeFile, Series, SeriesType};
