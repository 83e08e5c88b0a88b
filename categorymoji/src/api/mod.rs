pub mod emoji;
