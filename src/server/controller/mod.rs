pub mod course;
pub mod group;
pub mod param;
pub mod report;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
