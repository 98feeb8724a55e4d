pub mod stream;
pub mod track;

pub use stream::RadarStream;
pub use track::TrackIterator;
