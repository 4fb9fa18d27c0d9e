//! Named numeric axis configurations.
//!
//! An [`AxisConfig`] is a set of simultaneous numeric style properties
//! (in a browser host: font variation axes such as `wght` or `GRAD`)
//! that are interpolated together as one animated unit. Keys are kept in
//! a sorted map so the composed style string has a deterministic order
//! regardless of insertion order.

use crate::error::MotionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered mapping from axis name to value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisConfig(BTreeMap<String, f64>);

impl AxisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, axis: impl Into<String>, value: f64) -> &mut Self {
        self.0.insert(axis.into(), value);
        self
    }

    pub fn get(&self, axis: &str) -> Option<f64> {
        self.0.get(axis).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Render the configuration as a composite style descriptor:
    /// each axis as `"name" value`, comma-separated, in key order.
    /// Integral values print without a fractional part (`800`, not
    /// `800.0`).
    pub fn style_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('"');
            out.push_str(name);
            out.push_str("\" ");
            out.push_str(&value.to_string());
        }
        out
    }

    /// Linearly interpolate every axis toward `to` at eased progress
    /// `eased`. Progress outside [0,1] is legal (bezier overshoot) and
    /// yields values outside the [from,to] range.
    ///
    /// Every axis of `self` must exist in `to`; a missing axis fails fast
    /// with [`MotionError::AxisMismatch`].
    pub fn lerp(&self, to: &AxisConfig, eased: f64) -> Result<AxisConfig, MotionError> {
        let mut out = BTreeMap::new();
        for (name, from) in &self.0 {
            let to_value = to.get(name).ok_or_else(|| MotionError::AxisMismatch {
                axis: name.clone(),
            })?;
            out.insert(name.clone(), from + (to_value - from) * eased);
        }
        Ok(AxisConfig(out))
    }

    /// Check up front that `to` can serve as an interpolation end state
    /// for `self`.
    pub fn check_compatible(&self, to: &AxisConfig) -> Result<(), MotionError> {
        for name in self.0.keys() {
            if to.get(name).is_none() {
                return Err(MotionError::AxisMismatch { axis: name.clone() });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AxisConfig {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        AxisConfig(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_string_is_key_ordered() {
        let cfg: AxisConfig = [("wght", 800.0), ("GRAD", -60.0), ("slnt", 0.0)]
            .into_iter()
            .collect();
        // BTreeMap order: ASCII uppercase sorts before lowercase.
        assert_eq!(cfg.style_string(), r#""GRAD" -60, "slnt" 0, "wght" 800"#);
    }

    #[test]
    fn fractional_values_keep_their_fraction() {
        let cfg: AxisConfig = [("wght", 650.5)].into_iter().collect();
        assert_eq!(cfg.style_string(), r#""wght" 650.5"#);
    }

    #[test]
    fn lerp_midpoint() {
        let from: AxisConfig = [("a", 0.0), ("b", 10.0)].into_iter().collect();
        let to: AxisConfig = [("a", 10.0), ("b", 0.0)].into_iter().collect();
        let mid = from.lerp(&to, 0.5).unwrap();
        assert_eq!(mid.get("a"), Some(5.0));
        assert_eq!(mid.get("b"), Some(5.0));
    }

    #[test]
    fn lerp_allows_overshoot() {
        let from: AxisConfig = [("a", 0.0)].into_iter().collect();
        let to: AxisConfig = [("a", 10.0)].into_iter().collect();
        let over = from.lerp(&to, 1.06).unwrap();
        assert!(over.get("a").unwrap() > 10.0);
    }

    #[test]
    fn missing_axis_fails_fast() {
        let from: AxisConfig = [("a", 0.0), ("b", 1.0)].into_iter().collect();
        let to: AxisConfig = [("a", 10.0)].into_iter().collect();
        assert_eq!(
            from.lerp(&to, 0.5),
            Err(MotionError::AxisMismatch { axis: "b".into() })
        );
    }
}
