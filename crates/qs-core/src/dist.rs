//! Sampling distributions for speeds and service draws.

use rand::Rng;
use rand_distr::{Distribution, Gamma, LogNormal};

use crate::{CoreError, CoreResult, RunConfig};

/// The two distributions every scenario draws from.
///
/// - speed: `Gamma(shape, scale)`, shared by agents and resources.
/// - service: `LogNormal(mu, sigma)`, the unscaled per-visit service draw.
///   A visit lasts `service × agent.speed × resource.speed`.
#[derive(Clone, Debug)]
pub struct ServiceDistributions {
    speed:   Gamma<f64>,
    service: LogNormal<f64>,
}

impl ServiceDistributions {
    /// # Errors
    /// `Distribution` if a Gamma parameter is not finite-positive, `mu` is not
    /// finite, or `sigma` is negative or not finite.
    pub fn new(speed_shape: f64, speed_scale: f64, service_mu: f64, service_sigma: f64) -> CoreResult<Self> {
        // `LogNormal::new` accepts any finite sigma, including negative ones.
        if !service_mu.is_finite() || !(service_sigma.is_finite() && service_sigma >= 0.0) {
            return Err(CoreError::Distribution(format!(
                "LogNormal(mu={service_mu}, sigma={service_sigma}): mu must be finite and sigma finite and non-negative"
            )));
        }
        let speed = Gamma::new(speed_shape, speed_scale).map_err(|e| {
            CoreError::Distribution(format!(
                "Gamma(shape={speed_shape}, scale={speed_scale}): {e}"
            ))
        })?;
        let service = LogNormal::new(service_mu, service_sigma).map_err(|e| {
            CoreError::Distribution(format!(
                "LogNormal(mu={service_mu}, sigma={service_sigma}): {e}"
            ))
        })?;
        Ok(Self { speed, service })
    }

    /// Build from the distribution parameters carried by a [`RunConfig`].
    pub fn from_config(config: &RunConfig) -> CoreResult<Self> {
        Self::new(
            config.speed_shape,
            config.speed_scale,
            config.service_mu,
            config.service_sigma,
        )
    }

    /// Draw a speed parameter (agent or resource).
    #[inline]
    pub fn speed<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.speed.sample(rng)
    }

    /// Draw an unscaled service factor.
    #[inline]
    pub fn service<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.service.sample(rng)
    }
}
