//! Requests an AMI of every EC2 instance tagged for backup. Invoked
//! as an AWS Lambda function (`main`) or as a one-shot local command
//! (`bin/command`).

pub mod app;
pub mod client;
pub mod conf;
pub mod instances;
