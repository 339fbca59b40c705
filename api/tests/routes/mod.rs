mod health_test;
mod results;
mod student;
mod teacher;
