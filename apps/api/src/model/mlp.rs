//! Forward pass of a fitted multi-layer perceptron classifier.
//!
//! Mirrors scikit-learn's `MLPClassifier`: hidden layers share one activation,
//! the output layer uses softmax (multi-class) or logistic (binary).

use ndarray::{array, Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::model::artifact::ClassifierParams;
use crate::model::ArtifactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Identity,
    Logistic,
    Tanh,
    Relu,
}

impl Activation {
    fn apply(self, z: &mut Array1<f64>) {
        match self {
            Activation::Identity => {}
            Activation::Logistic => z.mapv_inplace(sigmoid),
            Activation::Tanh => z.mapv_inplace(f64::tanh),
            Activation::Relu => z.mapv_inplace(|v| v.max(0.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputActivation {
    Softmax,
    Logistic,
}

#[derive(Debug, Clone)]
struct DenseLayer {
    weights: Array2<f64>,
    bias: Array1<f64>,
}

#[derive(Debug, Clone)]
pub struct MlpClassifier {
    layers: Vec<DenseLayer>,
    activation: Activation,
    out_activation: OutputActivation,
}

impl MlpClassifier {
    pub fn from_params(params: &ClassifierParams) -> Result<Self, ArtifactError> {
        let layers = params
            .coefs
            .iter()
            .zip(&params.intercepts)
            .map(|(coef, bias)| {
                let flat: Vec<f64> = coef.iter().flatten().copied().collect();
                let weights = Array2::from_shape_vec((coef.len(), bias.len()), flat)
                    .map_err(|e| ArtifactError::Shape(format!("bad weight matrix: {e}")))?;
                Ok(DenseLayer {
                    weights,
                    bias: Array1::from(bias.clone()),
                })
            })
            .collect::<Result<Vec<_>, ArtifactError>>()?;

        if layers.is_empty() {
            return Err(ArtifactError::Shape("classifier has no layers".to_string()));
        }

        Ok(Self {
            layers,
            activation: params.activation,
            out_activation: params.out_activation,
        })
    }

    /// Class-probability distribution for one transformed row.
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let last = self.layers.len() - 1;
        let mut a = x.to_owned();
        for (i, layer) in self.layers.iter().enumerate() {
            let mut z = a.dot(&layer.weights) + &layer.bias;
            if i < last {
                self.activation.apply(&mut z);
            }
            a = z;
        }

        match self.out_activation {
            OutputActivation::Softmax => softmax(a),
            OutputActivation::Logistic => {
                let p = sigmoid(a[0]);
                array![1.0 - p, p]
            }
        }
    }
}

fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}

fn softmax(mut logits: Array1<f64>) -> Array1<f64> {
    let max = logits.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    logits.mapv_inplace(|v| (v - max).exp());
    let total = logits.sum();
    logits / total
}
