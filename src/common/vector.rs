//! Embedding vector helpers.

/// Cosine similarity of two vectors.
///
/// Returns `None` for vectors of different length, zero magnitude, or
/// non-finite components.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, na, nb), (&x, &y)| {
            let (x, y) = (f64::from(x), f64::from(y));
            (dot + x * y, na + x * x, nb + y * y)
        },
    );

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    similarity.is_finite().then_some(similarity)
}

/// Component-wise mean of equally sized vectors.
///
/// Returns `None` when `vectors` is empty or the sizes disagree.
pub fn mean_vector(vectors: &[Vec<f32>]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let dimensions = first.len();
    if vectors.iter().any(|v| v.len() != dimensions) {
        return None;
    }

    let mut sum = vec![0.0f64; dimensions];
    for vector in vectors {
        for (acc, &value) in sum.iter_mut().zip(vector) {
            *acc += f64::from(value);
        }
    }

    let count = vectors.len() as f64;
    Some(sum.into_iter().map(|v| (v / count) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors_have_similarity_one() {
        let v = vec![0.3, -1.0, 2.0];
        let similarity = cosine_similarity(&v, &v).unwrap();
        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(similarity.abs() < 1e-12);
    }

    #[test]
    fn test_opposite_vectors() {
        let similarity = cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap();
        assert!((similarity + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), None);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 1.0]), None);
        assert_eq!(cosine_similarity(&[], &[]), None);
        assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]), None);
    }

    #[test]
    fn test_mean_vector() {
        let mean = mean_vector(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(mean, vec![2.0, 3.0]);
        assert_eq!(mean_vector(&[]), None);
        assert_eq!(mean_vector(&[vec![1.0], vec![1.0, 2.0]]), None);
    }
}
