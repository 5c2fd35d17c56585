//! Input validation for adapters
//!
//! Range checks applied to raw user input before a [`crate::BodyDefinition`]
//! is constructed. The core types enforce their own invariants; these
//! helpers exist so adapters can reject implausible values with friendly
//! messages first.

/// Validate a body fat percentage (0-100)
pub fn validate_body_fat_percent(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Body fat percentage must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Body fat percentage must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate a height in centimeters (50-300)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate a weight in kilograms (20-500)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate an age in years (1-150)
pub fn validate_age_years(age: i32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_body_fat_percent() {
        assert!(validate_body_fat_percent(0.0).is_ok());
        assert!(validate_body_fat_percent(20.0).is_ok());
        assert!(validate_body_fat_percent(100.0).is_ok());
        assert!(validate_body_fat_percent(-1.0).is_err());
        assert!(validate_body_fat_percent(101.0).is_err());
        assert!(validate_body_fat_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(172.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(81.3).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age_years() {
        assert!(validate_age_years(35).is_ok());
        assert!(validate_age_years(1).is_ok());
        assert!(validate_age_years(150).is_ok());
        assert!(validate_age_years(0).is_err());
        assert!(validate_age_years(151).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_body_fat_range(pct in 0.0f64..=100.0) {
            prop_assert!(validate_body_fat_percent(pct).is_ok());
        }

        #[test]
        fn prop_invalid_body_fat_above_max(pct in 100.1f64..1000.0) {
            prop_assert!(validate_body_fat_percent(pct).is_err());
        }

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }
    }
}
