//! The admission rules, one per file.

mod acceptable_size;
mod deleted_episode_file;
mod delay;
mod episode_requested;
mod free_space;
mod full_season;
mod history;
mod minimum_age;
mod raw_disk;
mod repack;
mod split_episode;

pub use acceptable_size::AcceptableSizeSpecification;
pub use deleted_episode_file::DeletedEpisodeFileSpecification;
pub use delay::DelaySpecification;
pub use episode_requested::EpisodeRequestedSpecification;
pub use free_space::FreeSpaceSpecification;
pub use full_season::FullSeasonSpecification;
pub use history::HistorySpecification;
pub use minimum_age::MinimumAgeSpecification;
pub use raw_disk::RawDiskSpecification;
pub use repack::RepackSpecification;
pub use split_episode::SplitEpisodeSpecification;

const SIZE_SUFFIXES: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Human readable byte count with one decimal, e.g. `1.5 GB`.
pub fn size_suffix(bytes: i128) -> String {
    if bytes < 0 {
        return format!("-{}", size_suffix(-bytes));
    }
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut index = 0;
    while value >= 1024.0 && index < SIZE_SUFFIXES.len() - 1 {
        value /= 1024.0;
        index += 1;
    }
    format!("{:.1} {}", value, SIZE_SUFFIXES[index])
}
