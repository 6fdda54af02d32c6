// Comment classification — trait-based abstraction for swappable backends.
//
// Each classification stage (toxicity, sentiment, intent, language) sits
// behind its own trait so the enrichment pipeline can be exercised with
// mocks and a backend can be swapped without touching the rest of the flow.
// The default implementations run local ONNX models.

pub mod download;
pub mod intent;
pub mod language;
pub mod sentiment;
pub(crate) mod session;
pub mod toxicity;
pub mod traits;

/// Softmax over a slice of logits. Subtracts the max first for numerical
/// stability; an empty slice yields an empty vector.
pub(crate) fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

/// Sigmoid activation: maps any real number to (0, 1).
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Index of the largest value in a slice. Empty slices yield 0 so callers
/// can index a non-empty candidate table safely.
pub(crate) fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
