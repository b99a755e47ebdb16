// src/lib.rs

// 1. Data Structures (The "Nouns")
// explicit 'pub' makes them available to main.rs
pub mod models;

// 2. Failure Taxonomy (The "Bad News")
pub mod error;

// 3. Interfaces (The "Contract")
pub mod traits;

// 4. Numerics (The "Calculator")
pub mod stats;

// 5. Business Logic (The "Brains")
pub mod strategy;

// 6. Significance Pipeline (The "Orchestrator")
pub mod engine;

// 7. Run Configuration (The "Knobs")
pub mod config;

// 8. Presentation (The "Printout")
pub mod report;
