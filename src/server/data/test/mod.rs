mod course;
mod group;
mod student;
