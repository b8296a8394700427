pub mod child;
pub mod coach;
pub mod competition;
pub mod group;
pub mod result;

pub use child::ChildRepository;
pub use coach::CoachRepository;
pub use competition::CompetitionRepository;
pub use group::GroupRepository;
pub use result::ResultRepository;
