/// A decoded location reading.
///
/// Missing values are zero and an unknown provider is the empty string. Records are built with
/// [`LocationRecord::new`] and the `with_*` setters and are read-only afterwards.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct LocationRecord {
    provider: String,
    accuracy: f64, // In meters
    altitude: f64, // In meters
    latitude: f64,
    longitude: f64,
    speed: f64, // In meters per second
}

impl LocationRecord {
    pub fn new(provider: impl Into<String>) -> Self {
        LocationRecord {
            provider: provider.into(),
            ..Default::default()
        }
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self
    }

    pub fn with_longitude(mut self, longitude: f64) -> Self {
        self.longitude = longitude;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}
