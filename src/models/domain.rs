use serde::{Deserialize, Serialize};

/// Airlines known to the prediction model, in training order.
///
/// The declared order is a wire contract: the one-hot encoder walks
/// `Airline::ALL` to produce the `airline_*` feature fields, and the
/// remote model was trained against exactly this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Airline {
    AirAsia,
    #[serde(rename = "Air_India")]
    AirIndia,
    #[serde(rename = "GO_FIRST")]
    GoFirst,
    Indigo,
    SpiceJet,
    Vistara,
}

impl Airline {
    pub const ALL: [Airline; 6] = [
        Airline::AirAsia,
        Airline::AirIndia,
        Airline::GoFirst,
        Airline::Indigo,
        Airline::SpiceJet,
        Airline::Vistara,
    ];

    /// Wire token used in feature field names.
    pub fn label(&self) -> &'static str {
        match self {
            Airline::AirAsia => "AirAsia",
            Airline::AirIndia => "Air_India",
            Airline::GoFirst => "GO_FIRST",
            Airline::Indigo => "Indigo",
            Airline::SpiceJet => "SpiceJet",
            Airline::Vistara => "Vistara",
        }
    }

    /// Human-readable name (underscores replaced with spaces).
    pub fn display_name(&self) -> &'static str {
        match self {
            Airline::AirIndia => "Air India",
            Airline::GoFirst => "GO FIRST",
            other => other.label(),
        }
    }

    /// Two-letter IATA carrier code.
    pub fn iata_code(&self) -> &'static str {
        match self {
            Airline::AirAsia => "AK",
            Airline::AirIndia => "AI",
            Airline::GoFirst => "G8",
            Airline::Indigo => "6E",
            Airline::SpiceJet => "SG",
            Airline::Vistara => "UK",
        }
    }

    /// Parse from a wire token, display name, or IATA code.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| {
            a.label().eq_ignore_ascii_case(value)
                || a.display_name().eq_ignore_ascii_case(value)
                || a.iata_code().eq_ignore_ascii_case(value)
        })
    }
}

/// Cities served by the model, in training order. Used identically for
/// the source and destination feature groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Bangalore,
    Chennai,
    Delhi,
    Hyderabad,
    Kolkata,
    Mumbai,
}

impl City {
    pub const ALL: [City; 6] = [
        City::Bangalore,
        City::Chennai,
        City::Delhi,
        City::Hyderabad,
        City::Kolkata,
        City::Mumbai,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            City::Bangalore => "Bangalore",
            City::Chennai => "Chennai",
            City::Delhi => "Delhi",
            City::Hyderabad => "Hyderabad",
            City::Kolkata => "Kolkata",
            City::Mumbai => "Mumbai",
        }
    }

    /// Three-letter airport code shown next to the city name.
    pub fn airport_code(&self) -> &'static str {
        match self {
            City::Bangalore => "BLR",
            City::Chennai => "MAA",
            City::Delhi => "DEL",
            City::Hyderabad => "HYD",
            City::Kolkata => "CCU",
            City::Mumbai => "BOM",
        }
    }

    /// Parse from a city name or airport code.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| {
            c.label().eq_ignore_ascii_case(value) || c.airport_code().eq_ignore_ascii_case(value)
        })
    }
}

/// Time-of-day windows, in training order. Used identically for the
/// departure and arrival feature groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "Early_Morning")]
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(rename = "Late_Night")]
    LateNight,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
        TimeSlot::LateNight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Early_Morning",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
            TimeSlot::LateNight => "Late_Night",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "Early Morning",
            TimeSlot::LateNight => "Late Night",
            other => other.label(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| {
            t.label().eq_ignore_ascii_case(value) || t.display_name().eq_ignore_ascii_case(value)
        })
    }
}

/// Cabin class, encoded numerically on the wire (0 = Economy, 1 = Business).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    Business,
}

impl CabinClass {
    /// Numeric code used in the feature vector.
    pub fn code(&self) -> u8 {
        match self {
            CabinClass::Economy => 0,
            CabinClass::Business => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::Business => "Business",
        }
    }

    /// Parse from a name or numeric code.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0" => Some(CabinClass::Economy),
            "1" => Some(CabinClass::Business),
            _ if value.eq_ignore_ascii_case("Economy") => Some(CabinClass::Economy),
            _ if value.eq_ignore_ascii_case("Business") => Some(CabinClass::Business),
            _ => None,
        }
    }
}

/// Display currencies with fixed conversion rates relative to INR,
/// the base currency the prediction service responds in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Inr,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Aud,
        Currency::Cad,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Fixed multiplier relative to INR (1 INR = rate units of this currency).
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Eur => 0.011,
            Currency::Gbp => 0.0095,
            Currency::Aud => 0.018,
            Currency::Cad => 0.016,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(value))
    }
}

/// A flight as described by the form.
///
/// `stops` keeps the model's inverted encoding (3 = non-stop down to
/// 0 = three stops); the display label is derived, never the stored value.
/// Source and destination may transiently be equal while the form is
/// edited; the validator rejects the combination at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub stops: u8,
    pub cabin_class: CabinClass,
    pub airline: Airline,
    pub source: City,
    pub destination: City,
    pub departure: TimeSlot,
    pub arrival: TimeSlot,
    pub duration_minutes: f64,
    pub days_left: i64,
}

impl FlightQuery {
    /// Display label for the stops encoding.
    pub fn stops_label(&self) -> &'static str {
        match self.stops {
            3 => "Non-stop",
            2 => "1 Stop",
            1 => "2 Stops",
            _ => "3 Stops",
        }
    }
}

impl Default for FlightQuery {
    fn default() -> Self {
        Self {
            stops: 3,
            cabin_class: CabinClass::Economy,
            airline: Airline::AirAsia,
            source: City::Bangalore,
            destination: City::Delhi,
            departure: TimeSlot::Morning,
            arrival: TimeSlot::Evening,
            duration_minutes: 120.0,
            days_left: 10,
        }
    }
}
