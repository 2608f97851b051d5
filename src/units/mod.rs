//! 단위 정의 및 변환 모듈 모음.

pub mod volume;

pub use volume::{
    abbreviation, convert_volume, format_volume, from_milliliter, to_milliliter, Volume,
    VolumeUnit,
};
