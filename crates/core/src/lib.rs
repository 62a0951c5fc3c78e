pub mod restaurant;
pub mod storage;
