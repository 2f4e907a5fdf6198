//! # Domain Services
//!
//! エンティティをまたぐビジネスルール

pub mod validation;
