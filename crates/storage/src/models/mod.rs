pub mod child;
pub mod coach;
pub mod competition;
pub mod group;
pub mod result;

pub use child::Child;
pub use coach::Coach;
pub use competition::Competition;
pub use group::Group;
pub use result::CompetitionResult;
