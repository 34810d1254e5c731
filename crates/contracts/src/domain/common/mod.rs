pub mod person;

pub use person::{ChildDto, PersonDto, PersonOtherInfoDto};
