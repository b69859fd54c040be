pub mod calendar;
pub mod entities;
pub mod moods;
pub mod report;
pub mod state;
pub mod storage;
pub mod tasks;
