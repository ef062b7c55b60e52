//! The demo dataset shown in demo mode and after an upload.

use chrono::{DateTime, TimeZone, Utc};
use keepsake_models::{AiAnalysis, Memory, Photo, PhotoBuilder};

const PLACEHOLDER_URL: &str = "/placeholder.svg";

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

struct DemoPhoto<'a> {
    id: &'a str,
    taken: DateTime<Utc>,
    location: &'a str,
    coordinates: (f64, f64),
    description: &'a str,
    objects: &'a [&'a str],
    people: &'a [&'a str],
    emotions: &'a [&'a str],
    confidence: f32,
}

impl DemoPhoto<'_> {
    fn build(self) -> Photo {
        PhotoBuilder::new(self.id, PLACEHOLDER_URL)
            .taken_at(self.taken)
            .location(self.location)
            .coordinates(self.coordinates.0, self.coordinates.1)
            .analysis(AiAnalysis {
                description: self.description.to_string(),
                detected_objects: strings(self.objects),
                detected_people: strings(self.people),
                emotions: strings(self.emotions),
                confidence: self.confidence,
            })
            .build()
    }
}

/// Five sample memories spanning 2015 to 2020.
pub fn demo_memories() -> Vec<Memory> {
    vec![
        Memory::builder("1", "Family Beach Vacation", day(2015, 7, 15))
            .narrative(
                "It was a beautiful summer day at the beach in July 2015. The warm sun shone \
                 down as you built sandcastles with the kids, their laughter echoing across the \
                 shore. The ocean breeze was refreshing, and everyone seemed so happy and \
                 carefree. This was a perfect family moment, captured forever in time.",
            )
            .photo(
                DemoPhoto {
                    id: "p1",
                    taken: day(2015, 7, 15),
                    location: "Santa Monica Beach, CA",
                    coordinates: (34.0195, -118.4912),
                    description: "Family on beach, children playing in sand",
                    objects: &["beach", "ocean", "sandcastle", "people"],
                    people: &["John Smith", "Emma Smith", "Sophie Smith"],
                    emotions: &["happy", "joyful", "playful"],
                    confidence: 0.92,
                }
                .build(),
            )
            .location("Santa Monica Beach, CA")
            .people(["John Smith", "Emma Smith", "Sophie Smith"])
            .emotions(["happy", "joyful", "peaceful"])
            .category("Family")
            .build(),
        Memory::builder("2", "Birthday Celebration at Home", day(2018, 3, 22))
            .narrative(
                "March 2018 brought a wonderful celebration at home. The living room was \
                 decorated with colorful balloons and streamers as family and friends gathered \
                 around. The birthday cake sat at the center of the table, candles flickering in \
                 the warm glow. Everyone sang together, their voices filled with love and \
                 celebration.",
            )
            .photo(
                DemoPhoto {
                    id: "p2",
                    taken: day(2018, 3, 22),
                    location: "Home",
                    coordinates: (34.0522, -118.2437),
                    description: "Indoor birthday party with cake and decorations",
                    objects: &["cake", "balloons", "people", "decorations"],
                    people: &["Sarah Johnson", "Emma Smith", "Michael Johnson"],
                    emotions: &["happy", "excited", "celebratory"],
                    confidence: 0.89,
                }
                .build(),
            )
            .location("Home")
            .people(["Sarah Johnson", "Emma Smith", "Michael Johnson"])
            .emotions(["happy", "excited", "loving"])
            .category("Celebration")
            .build(),
        Memory::builder("3", "Graduation Ceremony", day(2020, 6, 12))
            .narrative(
                "June 2020 marked a significant milestone - graduation day. Despite the \
                 challenges of the year, there was pride and accomplishment in the air. The cap \
                 and gown represented years of hard work and dedication. Family members beamed \
                 with pride as they watched this important moment unfold, knowing it was the \
                 beginning of a new chapter.",
            )
            .photo(
                DemoPhoto {
                    id: "p3",
                    taken: day(2020, 6, 12),
                    location: "University Campus",
                    coordinates: (34.0689, -118.4452),
                    description: "Graduation ceremony with cap and gown",
                    objects: &["graduation cap", "diploma", "people", "campus"],
                    people: &["Emma Smith", "John Smith", "Sarah Johnson"],
                    emotions: &["proud", "accomplished", "hopeful"],
                    confidence: 0.95,
                }
                .build(),
            )
            .location("University Campus")
            .people(["Emma Smith", "John Smith", "Sarah Johnson"])
            .emotions(["proud", "accomplished", "hopeful"])
            .category("Milestone")
            .build(),
        Memory::builder("4", "Autumn Park Walk", day(2016, 10, 8))
            .narrative(
                "October 2016 painted the park in vibrant autumn colors. Golden and crimson \
                 leaves carpeted the walking path as you strolled through the peaceful \
                 afternoon. The crisp air felt refreshing, and the beauty of nature in \
                 transition was breathtaking. It was one of those quiet moments where \
                 everything felt just right.",
            )
            .photo(
                DemoPhoto {
                    id: "p4",
                    taken: day(2016, 10, 8),
                    location: "Central Park",
                    coordinates: (40.7829, -73.9654),
                    description: "Person walking through autumn park with colorful leaves",
                    objects: &["trees", "leaves", "path", "person"],
                    people: &["John Smith"],
                    emotions: &["peaceful", "contemplative", "serene"],
                    confidence: 0.88,
                }
                .build(),
            )
            .location("Central Park")
            .people(["John Smith"])
            .emotions(["peaceful", "serene", "appreciative"])
            .category("Nature")
            .build(),
        Memory::builder("5", "Holiday Dinner Gathering", day(2017, 12, 24))
            .narrative(
                "December 2017 brought the family together for a wonderful holiday dinner. The \
                 dining table was beautifully set with festive decorations and delicious food. \
                 Conversations flowed easily as everyone shared stories and laughter. The \
                 warmth of being surrounded by loved ones made this evening truly special and \
                 memorable.",
            )
            .photo(
                DemoPhoto {
                    id: "p5",
                    taken: day(2017, 12, 24),
                    location: "Home",
                    coordinates: (34.0522, -118.2437),
                    description: "Holiday dinner table with family gathered around",
                    objects: &["table", "food", "decorations", "people"],
                    people: &["John Smith", "Sarah Johnson", "Emma Smith", "Michael Johnson"],
                    emotions: &["warm", "joyful", "grateful"],
                    confidence: 0.91,
                }
                .build(),
            )
            .location("Home")
            .people(["John Smith", "Sarah Johnson", "Emma Smith", "Michael Johnson"])
            .emotions(["warm", "joyful", "grateful"])
            .category("Holiday")
            .build(),
    ]
}
