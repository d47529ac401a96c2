use super::Coordinates;

/// Rectángulo mínimo (lat/lng) que contiene un conjunto de puntos
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Bounds degenerados en un solo punto
    pub fn from_point(point: Coordinates) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    /// Construye los bounds de todos los puntos; `None` si no hay ninguno
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: Coordinates) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    /// Centroide del rectángulo
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    pub fn south_west(&self) -> Coordinates {
        Coordinates::new(self.south, self.west)
    }

    pub fn north_east(&self) -> Coordinates {
        Coordinates::new(self.north, self.east)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_points_no_bounds() {
        assert_eq!(LatLngBounds::from_points(Vec::new()), None);
    }

    #[test]
    fn single_point_is_its_own_center() {
        let p = Coordinates::new(12.9141, 74.856);
        let bounds = LatLngBounds::from_points([p]).unwrap();
        assert_eq!(bounds.center(), p);
        assert_eq!(bounds.south_west(), bounds.north_east());
    }

    #[test]
    fn center_of_two_reports() {
        let bounds = LatLngBounds::from_points([
            Coordinates::new(12.90, 74.80),
            Coordinates::new(12.92, 74.90),
        ])
        .unwrap();
        let center = bounds.center();
        assert!(approx(center.lat, 12.91));
        assert!(approx(center.lng, 74.85));
    }

    #[test]
    fn extend_grows_to_enclose_every_point() {
        let points = [
            Coordinates::new(12.95, 74.82),
            Coordinates::new(12.88, 74.86),
            Coordinates::new(12.91, 74.79),
            Coordinates::new(12.93, 74.91),
        ];
        let bounds = LatLngBounds::from_points(points).unwrap();
        assert_eq!(bounds.south_west(), Coordinates::new(12.88, 74.79));
        assert_eq!(bounds.north_east(), Coordinates::new(12.95, 74.91));
        assert!(points.iter().all(|p| {
            (bounds.south..=bounds.north).contains(&p.lat) && (bounds.west..=bounds.east).contains(&p.lng)
        }));
    }
}
