pub mod in_memory;

/// Reference list prices used to seed a fresh catalog.
pub const DEFAULT_BASE_PRICES: &[(&str, f64)] = &[
    ("Milk_1L", 60.0),
    ("Curd_500g", 40.0),
    ("Paneer_200g", 90.0),
    ("Rice_5kg", 250.0),
    ("Wheat_Atta_10kg", 450.0),
    ("Maggi_Pack", 12.0),
    ("Parle_G_Biscuit", 10.0),
    ("Lays_Chips", 20.0),
    ("Kurkure", 20.0),
    ("Tata_Tea_250g", 120.0),
    ("Nescafe_Coffee", 150.0),
    ("Coca_Cola_1L", 40.0),
    ("Amul_Ice_Cream", 80.0),
    ("Dettol_Soap", 35.0),
    ("Colgate_Toothpaste", 45.0),
];
