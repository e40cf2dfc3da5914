//! Embedded category word lists
//!
//! Word lists compiled into the binary. All entries are lowercase ASCII.

/// Fruit words
pub const FRUITS: &[&str] = &[
    "apple",
    "banana",
    "mango",
    "strawberry",
    "orange",
    "grape",
    "pineapple",
    "apricot",
    "lemon",
    "coconut",
    "watermelon",
    "cherry",
    "papaya",
    "berry",
    "peach",
    "lychee",
    "muskmelon",
    "kiwi",
    "pomegranate",
    "dragonfruit",
];

/// Animal words
pub const ANIMALS: &[&str] = &[
    "elephant",
    "giraffe",
    "monkey",
    "zebra",
    "lion",
    "tiger",
    "bear",
    "wolf",
    "fox",
    "deer",
    "rabbit",
    "squirrel",
    "dolphin",
    "whale",
    "shark",
    "eagle",
    "hawk",
    "snake",
    "turtle",
    "crocodile",
];

/// Country words
pub const COUNTRIES: &[&str] = &[
    "india",
    "australia",
    "japan",
    "brazil",
    "canada",
    "mexico",
    "france",
    "germany",
    "italy",
    "spain",
    "egypt",
    "china",
    "russia",
    "kenya",
    "nigeria",
    "peru",
    "chile",
    "sweden",
    "finland",
    "norway",
];

/// Vegetable words
pub const VEGETABLES: &[&str] = &[
    "carrot",
    "potato",
    "tomato",
    "cabbage",
    "spinach",
    "broccoli",
    "cauliflower",
    "cucumber",
    "eggplant",
    "pepper",
    "celery",
    "lettuce",
    "radish",
    "onion",
    "garlic",
    "pumpkin",
    "zucchini",
    "squash",
];
