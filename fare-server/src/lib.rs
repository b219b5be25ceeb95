//! Greater Taipei bus fare estimation server.
//!
//! A web application that answers two questions: "what does this
//! combination of bus trips cost?" (relayed to the remote fare
//! backend) and "how many fare segments is the leg between these two
//! stops?" (derived locally from the route's stop listing).

pub mod backend;
pub mod cache;
pub mod config;
pub mod domain;
pub mod fare;
pub mod web;
