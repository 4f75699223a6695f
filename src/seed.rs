//! First-run bootstrap data. In a deployment backed by a real service this
//! would come from an API; here it seeds the store when a collection is empty
//! and backs the migration path for records predating newer fields.

use crate::models::{Book, Order, PaymentMethod, Review};

pub fn books() -> Vec<Book> {
    vec![
        Book {
            id: 1705350000001,
            title: "The Midnight Library".to_string(),
            author: "Matt Haig".to_string(),
            genre: Some("Fantasy".to_string()),
            price: 18.50,
            rating: 4.2,
            isbn: "978-0525559474".to_string(),
            year: 2020,
            desc: Some("Between life and death there is a library, and within that library, the shelves go on forever. Every book provides a chance to try another life you could have lived.".to_string()),
            cover: Some("https://picsum.photos/seed/midnight/200/300".to_string()),
            reviews: vec![
                Review {
                    user: "Sarah J.".to_string(),
                    rating: 5.0,
                    text: "A life-changing read. Absolutely beautiful.".to_string(),
                },
                Review {
                    user: "Mike T.".to_string(),
                    rating: 4.0,
                    text: "Great concept, slightly slow middle.".to_string(),
                },
            ],
        },
        Book {
            id: 1705350000002,
            title: "Project Hail Mary".to_string(),
            author: "Andy Weir".to_string(),
            genre: Some("Sci-Fi".to_string()),
            price: 24.00,
            rating: 4.8,
            isbn: "978-0593135204".to_string(),
            year: 2021,
            desc: Some("Ryland Grace is the sole survivor on a desperate, last-chance mission—and if he fails, humanity and the earth itself will perish.".to_string()),
            cover: Some("https://picsum.photos/seed/hailmary/200/300".to_string()),
            reviews: vec![Review {
                user: "Elon M.".to_string(),
                rating: 5.0,
                text: "Couldn't put it down. Weir is back!".to_string(),
            }],
        },
        Book {
            id: 1705350000003,
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            genre: Some("Non-Fiction".to_string()),
            price: 15.99,
            rating: 4.9,
            isbn: "978-0735211292".to_string(),
            year: 2018,
            desc: Some("No matter your goals, Atomic Habits offers a proven framework for improving--every day.".to_string()),
            cover: Some("https://picsum.photos/seed/atomic/200/300".to_string()),
            reviews: vec![],
        },
        Book {
            id: 1705350000004,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: Some("Sci-Fi".to_string()),
            price: 12.00,
            rating: 4.5,
            isbn: "978-0441172719".to_string(),
            year: 1965,
            desc: Some("Set on the desert planet Arrakis, Dune is the story of the boy Paul Atreides, heir to a noble family tasked with ruling an inhospitable world where the only thing of value is the 'spice' melange.".to_string()),
            cover: Some("https://picsum.photos/seed/dune/200/300".to_string()),
            reviews: vec![Review {
                user: "Paul A.".to_string(),
                rating: 5.0,
                text: "The spice must flow.".to_string(),
            }],
        },
        Book {
            id: 1705350000005,
            title: "Thinking, Fast and Slow".to_string(),
            author: "Daniel Kahneman".to_string(),
            genre: Some("Psychology".to_string()),
            price: 14.50,
            rating: 4.0,
            isbn: "978-0374275631".to_string(),
            year: 2011,
            desc: Some("The major work of the Nobel Prize winner, expanding on the thesis that our minds are ruled by two systems.".to_string()),
            cover: Some("https://picsum.photos/seed/thinking/200/300".to_string()),
            reviews: vec![],
        },
        Book {
            id: 1705350000006,
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            genre: Some("Classic".to_string()),
            price: 9.99,
            rating: 4.7,
            isbn: "978-1503290563".to_string(),
            year: 1813,
            desc: Some("A romantic novel of manners written by Jane Austen. The novel follows the character development of Elizabeth Bennet.".to_string()),
            cover: Some("https://picsum.photos/seed/pride/200/300".to_string()),
            reviews: vec![Review {
                user: "Lizzy B.".to_string(),
                rating: 5.0,
                text: "Mr. Darcy is quite tolerable, I suppose.".to_string(),
            }],
        },
        Book {
            id: 1705350000007,
            title: "The Guns of August".to_string(),
            author: "Barbara W. Tuchman".to_string(),
            genre: Some("History".to_string()),
            price: 16.00,
            rating: 4.6,
            isbn: "978-0345476098".to_string(),
            year: 1962,
            desc: Some("A non-fiction book that provides a narrative of the first month of World War I.".to_string()),
            cover: Some("https://picsum.photos/seed/guns/200/300".to_string()),
            reviews: vec![],
        },
        Book {
            id: 1705350000008,
            title: "Sapiens: A Brief History of Humankind".to_string(),
            author: "Yuval Noah Harari".to_string(),
            genre: Some("History".to_string()),
            price: 18.99,
            rating: 4.5,
            isbn: "978-0062316097".to_string(),
            year: 2014,
            desc: Some("Harari surveys the history of humankind from the evolution of archaic human species in the Stone Age up to the twenty-first century.".to_string()),
            cover: Some("https://picsum.photos/seed/sapiens/200/300".to_string()),
            reviews: vec![],
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "#ORD-7829".to_string(),
            date: "Oct 24, 2025".to_string(),
            total: "$45.00".to_string(),
            status: "Delivered".to_string(),
            items: vec!["Dune".to_string(), "Atomic Habits".to_string()],
        },
        Order {
            id: "#ORD-7812".to_string(),
            date: "Sep 12, 2025".to_string(),
            total: "$12.50".to_string(),
            status: "Delivered".to_string(),
            items: vec!["The Midnight Library".to_string()],
        },
        Order {
            id: "#ORD-7901".to_string(),
            date: "Jan 15, 2026".to_string(),
            total: "$28.99".to_string(),
            status: "Processing".to_string(),
            items: vec!["Project Hail Mary".to_string()],
        },
    ]
}

pub fn payments() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            kind: "Visa".to_string(),
            last4: "4242".to_string(),
            expiry: "12/28".to_string(),
            holder: "Alex Reader".to_string(),
            is_default: true,
        },
        PaymentMethod {
            kind: "Mastercard".to_string(),
            last4: "8832".to_string(),
            expiry: "09/27".to_string(),
            holder: "Alex Reader".to_string(),
            is_default: false,
        },
    ]
}
