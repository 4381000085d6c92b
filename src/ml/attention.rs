use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::{softmax, tanh},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct AdditiveAttentionConfig {
    /// Size of each step's feature vector
    pub feature_dim: usize,
    /// Size of the hidden-state vector the features attend to
    pub hidden_dim: usize,
    /// Inner dimension of the score projection
    #[config(default = 16)]
    pub units: usize,
}

impl AdditiveAttentionConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> AdditiveAttention<B> {
        AdditiveAttention {
            w_features: LinearConfig::new(self.feature_dim, self.units).init(device),
            w_hidden:   LinearConfig::new(self.hidden_dim, self.units).init(device),
            score:      LinearConfig::new(self.units, 1).init(device),
        }
    }
}

/// Additive attention over a sequence of feature vectors.
///
/// Scores each step of `features` against a single `hidden`
/// vector and returns the attention-weighted sum of the steps
/// plus the weights themselves.
#[derive(Module, Debug)]
pub struct AdditiveAttention<B: Backend> {
    pub w_features: Linear<B>,
    pub w_hidden:   Linear<B>,
    pub score:      Linear<B>,
}

pub struct AttentionOutput<B: Backend> {
    /// Weighted sum of the feature steps — [batch, feature_dim]
    pub context: Tensor<B, 2>,
    /// Attention weights, summing to 1 along the step axis — [batch, steps, 1]
    pub weights: Tensor<B, 3>,
}

impl<B: Backend> AdditiveAttention<B> {
    /// features: [batch, steps, feature_dim], hidden: [batch, hidden_dim]
    pub fn forward(&self, features: Tensor<B, 3>, hidden: Tensor<B, 2>) -> AttentionOutput<B> {
        let [batch_size, _, feature_dim] = features.dims();

        // [batch, hidden_dim] → [batch, 1, hidden_dim] so the
        // projected hidden state broadcasts across every step
        let hidden_with_step_axis = hidden.unsqueeze_dim::<3>(1);

        // score: [batch, steps, units]
        let score = tanh(
            self.w_features.forward(features.clone())
                + self.w_hidden.forward(hidden_with_step_axis),
        );

        // weights: [batch, steps, 1] — softmax over the step axis,
        // so each sample's weights sum to 1
        let weights = softmax(self.score.forward(score), 1);

        // context: broadcast-weight the steps then sum them out
        let context = (features * weights.clone())
            .sum_dim(1)
            .reshape([batch_size, feature_dim]);

        AttentionOutput { context, weights }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::Distribution;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_output_shapes() {
        let device = Default::default();
        let attn = AdditiveAttentionConfig::new(4, 3)
            .with_units(8)
            .init::<TestBackend>(&device);

        let features = Tensor::<TestBackend, 3>::random(
            [2, 5, 4], Distribution::Default, &device,
        );
        let hidden = Tensor::<TestBackend, 2>::random(
            [2, 3], Distribution::Default, &device,
        );

        let out = attn.forward(features, hidden);
        assert_eq!(out.context.dims(), [2, 4]);
        assert_eq!(out.weights.dims(), [2, 5, 1]);
    }

    #[test]
    fn test_weights_sum_to_one_per_sample() {
        let device = Default::default();
        let attn = AdditiveAttentionConfig::new(4, 3).init::<TestBackend>(&device);

        let features = Tensor::<TestBackend, 3>::random(
            [3, 7, 4], Distribution::Default, &device,
        );
        let hidden = Tensor::<TestBackend, 2>::random(
            [3, 3], Distribution::Default, &device,
        );

        let out   = attn.forward(features, hidden);
        let sums: Vec<f32> = out.weights
            .sum_dim(1)
            .into_data()
            .to_vec()
            .unwrap();

        assert_eq!(sums.len(), 3);
        for s in sums {
            assert!((s - 1.0).abs() < 1e-5, "weights summed to {s}");
        }
    }

    #[test]
    fn test_single_step_gets_full_weight() {
        let device = Default::default();
        let attn = AdditiveAttentionConfig::new(2, 2).init::<TestBackend>(&device);

        // With one step there is nothing to distribute over:
        // softmax of a single score is always 1
        let features = Tensor::<TestBackend, 3>::random(
            [1, 1, 2], Distribution::Default, &device,
        );
        let hidden = Tensor::<TestBackend, 2>::random(
            [1, 2], Distribution::Default, &device,
        );

        let out = attn.forward(features, hidden);
        let w: Vec<f32> = out.weights.into_data().to_vec().unwrap();
        assert!((w[0] - 1.0).abs() < 1e-6);
    }
}
