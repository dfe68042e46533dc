use serde::Serialize;

/// One synthetic survey response, serialized straight into the CSV writer.
/// Field names double as the header row.
#[derive(Serialize)]
struct SurveyRow {
    faculty: &'static str,
    year: &'static str,
    gpa_range: &'static str,
    rating: u8,
    is_using_cgpt_for_ideas_cheating: &'static str,
    is_using_cgpt_to_write_cheating: &'static str,
    will_cgpt_increase_cheating: &'static str,
    will_cgpt_increase_or_hinder_learning: &'static str,
    how_can_unis_handle_cgpt: &'static str,
}

const FACULTIES: [(&str, u32); 6] = [
    ("Engineering", 30),
    ("Computer Science", 25),
    ("Business", 15),
    ("Natural Sciences", 12),
    ("Medicine", 10),
    ("Arts and Social Sciences", 8),
];

const YEARS: [(&str, u32); 5] = [
    ("Year 1", 30),
    ("Year 2", 28),
    ("Year 3", 22),
    ("Year 4", 15),
    ("Postgraduate", 5),
];

const GPA_RANGES: [(&str, u32); 5] = [
    ("3.0 - 3.5", 30),
    ("2.5 - 3.0", 25),
    ("3.5 - 4.0", 22),
    ("2.0 - 2.5", 17),
    ("< 2.0", 6),
];

// Ratings 1..=10, weighted toward the upper middle.
const RATING_WEIGHTS: [u32; 10] = [1, 1, 2, 4, 8, 12, 18, 24, 20, 10];

const IDEAS_OPINIONS: [(&str, u32); 3] = [("No", 55), ("Yes", 25), ("Maybe", 20)];
const WRITING_OPINIONS: [(&str, u32); 3] = [("Yes", 60), ("No", 22), ("Maybe", 18)];
const INCREASE_OPINIONS: [(&str, u32); 3] = [("Yes", 55), ("No", 25), ("Not sure", 20)];
const LEARNING_OPINIONS: [(&str, u32); 4] = [
    ("Increase learning", 35),
    ("Hinder learning", 30),
    ("Both", 25),
    ("Not sure", 10),
];
const HANDLING_OPINIONS: [(&str, u32); 5] = [
    ("Integrate it into teaching", 30),
    ("Update assessment methods", 25),
    ("Allow it with disclosure", 20),
    ("Ban it outright", 15),
    ("Do nothing", 10),
];

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Index into a weight table, proportional to the weights.
    fn pick_index(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        let mut roll = (self.next_u64() % u64::from(total)) as u32;
        for (i, weight) in weights.iter().enumerate() {
            if roll < *weight {
                return i;
            }
            roll -= weight;
        }
        weights.len() - 1
    }

    fn pick<'a>(&mut self, options: &[(&'a str, u32)]) -> &'a str {
        let weights: Vec<u32> = options.iter().map(|(_, w)| *w).collect();
        options[self.pick_index(&weights)].0
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let n_responses = 250;

    let mut writer = csv::Writer::from_path("survey.csv").expect("Failed to create survey.csv");

    for _ in 0..n_responses {
        let row = SurveyRow {
            faculty: rng.pick(&FACULTIES),
            year: rng.pick(&YEARS),
            gpa_range: rng.pick(&GPA_RANGES),
            rating: rng.pick_index(&RATING_WEIGHTS) as u8 + 1,
            is_using_cgpt_for_ideas_cheating: rng.pick(&IDEAS_OPINIONS),
            is_using_cgpt_to_write_cheating: rng.pick(&WRITING_OPINIONS),
            will_cgpt_increase_cheating: rng.pick(&INCREASE_OPINIONS),
            will_cgpt_increase_or_hinder_learning: rng.pick(&LEARNING_OPINIONS),
            how_can_unis_handle_cgpt: rng.pick(&HANDLING_OPINIONS),
        };
        writer.serialize(&row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush survey.csv");

    println!("Wrote {n_responses} survey responses to survey.csv");
}
