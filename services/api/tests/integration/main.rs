mod helpers;

mod auth_test;
mod visit_test;
mod workflow_test;
