//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Uses both custom validators and the `validator` crate's traits.

use validator::{ValidateEmail, ValidateUrl};

/// Oldest release year accepted by the movie catalog (exclusive)
pub const MIN_MOVIE_YEAR: i32 = 1900;
/// Newest release year accepted by the movie catalog (exclusive)
pub const MAX_MOVIE_YEAR: i32 = 2100;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a seller username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > 50 {
        return Err("Username too long".to_string());
    }
    let username_regex = regex_lite::Regex::new(r"^\S+$").expect("static regex");
    if !username_regex.is_match(username) {
        return Err("Username cannot contain whitespace".to_string());
    }
    Ok(())
}

/// Validate a password before hashing
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty".to_string());
    }
    if name.chars().count() > 200 {
        return Err("Product name too long".to_string());
    }
    Ok(())
}

/// Validate a product price
pub fn validate_price(price: f64) -> Result<(), String> {
    if price.is_nan() || price.is_infinite() {
        return Err("Price must be a valid number".to_string());
    }
    if price < 0.0 {
        return Err("Price cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a movie title
pub fn validate_movie_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Movie name cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a movie release year (strictly between 1900 and 2100)
pub fn validate_movie_year(year: i32) -> Result<(), String> {
    if year <= MIN_MOVIE_YEAR {
        return Err(format!("Year must be greater than {}", MIN_MOVIE_YEAR));
    }
    if year >= MAX_MOVIE_YEAR {
        return Err(format!("Year must be less than {}", MAX_MOVIE_YEAR));
    }
    Ok(())
}

/// Validate a thumbnail URL (absolute http/https)
pub fn validate_thumbnail_url(url: &str) -> Result<(), String> {
    if !url.validate_url() {
        return Err(format!("Invalid URL: {}", url));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("URL scheme must be http or https".to_string());
    }
    Ok(())
}
