/// "Scottie Scheffler" -> "S. Scheffler"
#[must_use]
pub fn short_player_name(player_name: &str) -> String {
    let parts: Vec<&str> = player_name.split_whitespace().collect();

    if parts.len() >= 2 {
        let first_initial = parts[0].chars().next().unwrap_or(' ');
        let last_name = parts[parts.len() - 1];
        format!("{first_initial}. {last_name}")
    } else {
        player_name.to_string()
    }
}

/// Linear scale from a data range onto a pixel range. A flat data range maps to the middle.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub data_min: f64,
    pub data_max: f64,
    pub px_min: f64,
    pub px_max: f64,
}

impl Scale {
    /// Builds a scale over `values`, padded by one stroke on each side.
    #[must_use]
    pub fn fit(values: impl IntoIterator<Item = f64>, px_min: f64, px_max: f64) -> Option<Self> {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;
        Some(Self {
            data_min: lo - 1.0,
            data_max: hi + 1.0,
            px_min,
            px_max,
        })
    }

    #[must_use]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.data_max - self.data_min;
        if span.abs() < f64::EPSILON {
            return (self.px_min + self.px_max) / 2.0;
        }
        self.px_min + (v - self.data_min) / span * (self.px_max - self.px_min)
    }
}
