//! The built-in sample dataset: six lawyer records, in listing order.
//!
//! The dataset is static and trusted; it is constructed once at load and
//! never mutated. Its order is the canonical output order of the filter
//! engine.

use crate::models::{Education, Lawyer};

fn edu(school: &str, degree: &str, year: u32) -> Education {
    Education {
        school: school.to_string(),
        degree: degree.to_string(),
        year,
    }
}

/// The sample lawyer records shown on the listing page.
pub fn sample_lawyers() -> Vec<Lawyer> {
    vec![
        Lawyer {
            id: 1,
            name: "Sarah Jenkins, Esq.".to_string(),
            image: "https://randomuser.me/api/portraits/women/44.jpg".to_string(),
            rating: 5.0,
            review_count: 85,
            specialty: "Family Law".to_string(),
            location: "Chicago, IL".to_string(),
            experience: 15,
            price: 350,
            verified: true,
            education: vec![
                edu("Harvard Law School", "J.D.", 2008),
                edu("Yale University", "B.A. Political Science", 2005),
            ],
        },
        Lawyer {
            id: 2,
            name: "James Carter".to_string(),
            image: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            rating: 4.8,
            review_count: 120,
            specialty: "Corporate Law".to_string(),
            location: "New York, NY".to_string(),
            experience: 8,
            price: 450,
            verified: true,
            education: vec![
                edu("Stanford Law", "LL.M. Corporate Governance", 2016),
                edu("Columbia University", "J.D.", 2014),
            ],
        },
        Lawyer {
            id: 3,
            name: "Maria Rodriguez".to_string(),
            image: "https://randomuser.me/api/portraits/women/65.jpg".to_string(),
            rating: 4.9,
            review_count: 45,
            specialty: "Criminal Defense".to_string(),
            location: "Austin, TX".to_string(),
            experience: 12,
            price: 300,
            verified: false,
            education: vec![edu("University of Texas", "J.D.", 2011)],
        },
        Lawyer {
            id: 4,
            name: "David Kim".to_string(),
            image: "https://randomuser.me/api/portraits/men/11.jpg".to_string(),
            rating: 4.7,
            review_count: 30,
            specialty: "Real Estate".to_string(),
            location: "Seattle, WA".to_string(),
            experience: 20,
            price: 500,
            verified: true,
            education: vec![edu("UCLA Law", "J.D.", 2003)],
        },
        Lawyer {
            id: 5,
            name: "Emily Blunt".to_string(),
            image: "https://randomuser.me/api/portraits/women/22.jpg".to_string(),
            rating: 4.5,
            review_count: 12,
            specialty: "Family Law".to_string(),
            location: "Boston, MA".to_string(),
            experience: 5,
            price: 250,
            verified: false,
            education: vec![edu("Boston College", "J.D.", 2018)],
        },
        Lawyer {
            id: 6,
            name: "Robert Langdon".to_string(),
            image: "https://randomuser.me/api/portraits/men/55.jpg".to_string(),
            rating: 5.0,
            review_count: 60,
            specialty: "Intellectual Property".to_string(),
            location: "San Francisco, CA".to_string(),
            experience: 18,
            price: 600,
            verified: true,
            education: vec![
                edu("Stanford Law", "J.D.", 2005),
                edu("MIT", "B.S. Engineering", 2002),
            ],
        },
    ]
}
