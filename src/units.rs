/// Reduce an angle in degrees into [0, 360).
pub fn wrap_360(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round a tiny negative input up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[test]
fn test_wrap_360() {
    assert_eq!(wrap_360(0.0), 0.0);
    assert_eq!(wrap_360(90.0), 90.0);
    assert_eq!(wrap_360(-90.0), 270.0);
    assert_eq!(wrap_360(360.0), 0.0);
    assert_eq!(wrap_360(-180.0), 180.0);
    assert_eq!(wrap_360(-1e-20), 0.0);
}

pub mod direction {
    const SECTOR: f64 = 45.0;

    pub const COMPASS: [&str; 8] = [
        "north",
        "north east",
        "east",
        "south east",
        "south",
        "south west",
        "west",
        "north west",
    ];

    /// Map a bearing in degrees (any range, negative allowed) to one of the eight compass
    /// labels. Sector 0 ("north") covers [-22.5, 22.5).
    pub fn bearing_to_label(deg: f64) -> &'static str {
        let shifted = (deg + SECTOR / 2.0).rem_euclid(360.0);
        let idx = (shifted / SECTOR) as usize % COMPASS.len();
        COMPASS[idx]
    }

    #[test]
    fn test_bearing_to_label() {
        assert_eq!(bearing_to_label(0.0), "north");
        assert_eq!(bearing_to_label(45.0), "north east");
        assert_eq!(bearing_to_label(90.0), "east");
        assert_eq!(bearing_to_label(135.0), "south east");
        assert_eq!(bearing_to_label(180.0), "south");
        assert_eq!(bearing_to_label(-135.0), "south west");
        assert_eq!(bearing_to_label(-90.0), "west");
        assert_eq!(bearing_to_label(-45.0), "north west");
        assert_eq!(bearing_to_label(360.0), "north");
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(bearing_to_label(22.5), "north east");
        assert_eq!(bearing_to_label(-22.5), "north");
        assert_eq!(bearing_to_label(22.4999), "north");
        assert_eq!(bearing_to_label(157.5), "south");
        assert_eq!(bearing_to_label(-157.5), "south west");
    }

    #[test]
    fn test_modulo_rounding_to_360() {
        // one ulp below -22.5 shifts to a negative value that rem_euclid rounds up to 360.0
        let just_below = f64::from_bits((-22.5f64).to_bits() + 1);
        assert!(just_below < -22.5);
        assert_eq!(bearing_to_label(just_below), "north");
    }
}
