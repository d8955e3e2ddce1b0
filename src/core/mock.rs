//! Seeded records for the in-memory session. Static display data only; the
//! AI assist layer receives these through explicit parameters, never by
//! reading ambient state.

use crate::core::models::{
    Comment, Poll, PollOption, Product, Store, Thread, ThreadCategory, ThreadStatus, Vendor,
    VendorReview,
};

fn comment(id: &str, author: &str, unit: &str, content: &str, timestamp: &str, seed: u32) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        unit: unit.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        avatar: format!("https://picsum.photos/32/32?random={seed}"),
    }
}

fn review(id: &str, author: &str, unit: &str, rating: u32, text: &str) -> VendorReview {
    VendorReview {
        id: id.to_string(),
        author: author.to_string(),
        unit: unit.to_string(),
        rating,
        text: text.to_string(),
    }
}

fn product(id: &str, name: &str, price: u32, seed: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image_url: format!("https://picsum.photos/100/100?random={seed}"),
    }
}

#[must_use]
pub fn threads() -> Vec<Thread> {
    vec![
        Thread {
            id: "1".to_string(),
            title: "🚨 Urgent: Water Supply Disruption in Block C".to_string(),
            author: "Rahul Sharma".to_string(),
            unit: "C-302".to_string(),
            category: ThreadCategory::RwaIssue,
            status: ThreadStatus::Open,
            timestamp: "2 hrs ago".to_string(),
            content: "The water pressure has been extremely low since this morning. Has anyone else faced this? We need a quick resolution from the maintenance team.".to_string(),
            comments: vec![
                comment("c1", "Anita Roy", "C-304", "Yes, same here. Not able to run the washing machine.", "1 hr ago", 1),
                comment("c2", "RWA Admin", "Office", "We are aware. The pump is being repaired and should be fixed by 4 PM.", "30 mins ago", 2),
                comment("c3", "Rahul Sharma", "C-302", "Thanks for the update. Please notify once done.", "10 mins ago", 3),
                comment("c4", "Vikram Singh", "B-505", "Is Block B affected too?", "5 mins ago", 4),
            ],
            poll: Some(Poll {
                id: "p1".to_string(),
                question: "Should we upgrade the backup pump?".to_string(),
                total_votes: 45,
                options: vec![
                    PollOption { label: "Yes, upgrade".to_string(), votes: 35 },
                    PollOption { label: "No, repair only".to_string(), votes: 10 },
                ],
            }),
        },
        Thread {
            id: "2".to_string(),
            title: "Parking Lot Allocation Dispute".to_string(),
            author: "Suresh Raina".to_string(),
            unit: "B-102".to_string(),
            category: ThreadCategory::RwaIssue,
            status: ThreadStatus::InProgress,
            timestamp: "5 hrs ago".to_string(),
            content: "My designated spot B-102 is constantly occupied by visitor cars. Security is not taking action despite multiple complaints.".to_string(),
            comments: vec![
                comment("c21", "Security Head", "Gate 1", "We have clamped the vehicle. New sticker system starting tomorrow.", "1 hr ago", 5),
            ],
            poll: None,
        },
        Thread {
            id: "3".to_string(),
            title: "✨ Diwali Mela 2025: Volunteers Needed".to_string(),
            author: "Cultural Comm.".to_string(),
            unit: "Admin".to_string(),
            category: ThreadCategory::Event,
            status: ThreadStatus::Open,
            timestamp: "1 day ago".to_string(),
            content: "Calling for volunteers for the upcoming Diwali Mela. We need people for decoration, food stalls, and crowd management. Lets make it grand!".to_string(),
            comments: vec![
                comment("c31", "Priya K.", "A-404", "I can handle the Rangoli competition.", "4 hrs ago", 6),
                comment("c32", "Rohan M.", "A-004", "I will sponsor the prizes for kids.", "2 hrs ago", 24),
            ],
            poll: None,
        },
        Thread {
            id: "4".to_string(),
            title: "Stray Dog Menace near Gate 2".to_string(),
            author: "Priya K.".to_string(),
            unit: "A-404".to_string(),
            category: ThreadCategory::RwaIssue,
            status: ThreadStatus::Open,
            timestamp: "3 hrs ago".to_string(),
            content: "A pack of stray dogs chased a delivery guy today. We need to contact the municipality for relocation or sterilization.".to_string(),
            comments: Vec::new(),
            poll: None,
        },
        Thread {
            id: "5".to_string(),
            title: "Gym Equipment Maintenance".to_string(),
            author: "Fitness Club".to_string(),
            unit: "Clubhouse".to_string(),
            category: ThreadCategory::General,
            status: ThreadStatus::Resolved,
            timestamp: "2 days ago".to_string(),
            content: "The treadmill #2 has been repaired and is back in service.".to_string(),
            comments: Vec::new(),
            poll: None,
        },
        Thread {
            id: "6".to_string(),
            title: "🔑 Lost Keys found in Park".to_string(),
            author: "Sneha Gupta".to_string(),
            unit: "A-101".to_string(),
            category: ThreadCategory::LostFound,
            status: ThreadStatus::Resolved,
            timestamp: "1 day ago".to_string(),
            content: "Found a set of car keys (Honda) on the bench near the kids play area. Handed over to security.".to_string(),
            comments: vec![
                comment("c61", "Vikram Singh", "B-505", "Oh! Those might be mine. I will check with security.", "20 hrs ago", 4),
                comment("c62", "Vikram Singh", "B-505", "Got them. Thanks Sneha!", "19 hrs ago", 4),
            ],
            poll: None,
        },
        Thread {
            id: "7".to_string(),
            title: "Yoga Classes Starting Next Week".to_string(),
            author: "Yoga Master".to_string(),
            unit: "Clubhouse".to_string(),
            category: ThreadCategory::Event,
            status: ThreadStatus::Open,
            timestamp: "3 days ago".to_string(),
            content: "Morning batch starts at 6 AM. Evening batch at 7 PM. Register at the office.".to_string(),
            comments: Vec::new(),
            poll: None,
        },
    ]
}

#[must_use]
pub fn vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: "v1".to_string(),
            name: "Reliable Plumbers Co.".to_string(),
            category: "Plumber".to_string(),
            contact: "+91 98765 43210".to_string(),
            rating: 4.8,
            review_count: 42,
            used_by_count: 156,
            image_url: "https://picsum.photos/400/300?random=10".to_string(),
            reviews: vec![
                review("r1", "Mrs. Verma", "D-202", 5, "Very professional and came on time. Fixed the leak instantly."),
                review("r2", "Mr. Khan", "A-105", 4, "Good work but slightly expensive."),
            ],
        },
        Vendor {
            id: "v2".to_string(),
            name: "Sparkle Clean Maids".to_string(),
            category: "Maid Agency".to_string(),
            contact: "+91 98989 89898".to_string(),
            rating: 4.2,
            review_count: 28,
            used_by_count: 89,
            image_url: "https://picsum.photos/400/300?random=11".to_string(),
            reviews: vec![
                review("r3", "Priya S.", "C-901", 5, "Provided a very good backup maid when our regular one was on leave."),
            ],
        },
        Vendor {
            id: "v3".to_string(),
            name: "A-1 Electric Works".to_string(),
            category: "Electrician".to_string(),
            contact: "+91 91234 56789".to_string(),
            rating: 4.5,
            review_count: 15,
            used_by_count: 45,
            image_url: "https://picsum.photos/400/300?random=12".to_string(),
            reviews: Vec::new(),
        },
    ]
}

#[must_use]
pub fn stores() -> Vec<Store> {
    vec![
        Store {
            id: "s1".to_string(),
            name: "Auntie's Kitchen".to_string(),
            owner_name: "Mrs. Dsouza".to_string(),
            unit: "B-202".to_string(),
            category: "Home Bakery".to_string(),
            image_url: "https://picsum.photos/400/300?random=20".to_string(),
            products: vec![
                product("p1", "Chocolate Truffle Cake (1kg)", 800, 21),
                product("p2", "Cupcakes (Box of 6)", 350, 22),
                product("p3", "Sourdough Bread", 200, 23),
            ],
        },
        Store {
            id: "s2".to_string(),
            name: "Rohan's Organic Farm".to_string(),
            owner_name: "Rohan M.".to_string(),
            unit: "A-004".to_string(),
            category: "Fresh Produce".to_string(),
            image_url: "https://picsum.photos/400/300?random=24".to_string(),
            products: vec![
                product("p4", "Fresh Spinach (Bundle)", 40, 25),
                product("p5", "Organic Tomatoes (1kg)", 80, 26),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_ids_unique_within_collections() {
        let threads = threads();
        let thread_ids: HashSet<_> = threads.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(thread_ids.len(), threads.len());

        for thread in &threads {
            let comment_ids: HashSet<_> = thread.comments.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(comment_ids.len(), thread.comments.len());
        }

        let vendors = vendors();
        let vendor_ids: HashSet<_> = vendors.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(vendor_ids.len(), vendors.len());
    }

    #[test]
    fn test_seeded_poll_totals_match_option_votes() {
        for thread in threads() {
            if let Some(poll) = thread.poll {
                let sum: u32 = poll.options.iter().map(|o| o.votes).sum();
                assert_eq!(sum, poll.total_votes, "poll {} totals drift", poll.id);
            }
        }
    }
}
