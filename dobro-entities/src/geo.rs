/// A geographic position given as latitude/longitude in degrees.
///
/// An absent position is always represented as `Option<MapPoint>::None`
/// and never as a fake `(0.0, 0.0)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat_deg(&self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(&self) -> f64 {
        self.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_positions_within_bounds() {
        let pos = MapPoint::try_from_lat_lng_deg(55.7558, 37.6173).unwrap();
        assert_eq!(pos.lat_deg(), 55.7558);
        assert_eq!(pos.lng_deg(), 37.6173);
    }

    #[test]
    fn reject_positions_out_of_bounds() {
        assert!(MapPoint::try_from_lat_lng_deg(91.0, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.5).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }
}
