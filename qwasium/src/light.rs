//! Lock indicator LEDs.

use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::channel::LED_INDICATOR_CHANNEL;
use crate::config::{LightConfig, LightPinConfig};
use crate::driver::gpio::OutputController;
use crate::led_indicator::{LedIndicator, LedIndicatorType};

/// Time each LED stays in a step of the startup blink
pub const BLINK_STEP: Duration = Duration::from_millis(50);

/// Shows the host's lock state on up to three LEDs: num lock, caps lock and scroll lock.
pub struct LightService<P: OutputPin> {
    numslock: Option<OutputController<P>>,
    capslock: Option<OutputController<P>>,
    scrolllock: Option<OutputController<P>>,
}

impl<P: OutputPin> LightService<P> {
    pub fn from_config(light_config: LightConfig<P>) -> Self {
        fn controller<P: OutputPin>(config: Option<LightPinConfig<P>>) -> Option<OutputController<P>> {
            config.map(|c| OutputController::new(c.pin, c.low_active))
        }
        Self {
            numslock: controller(light_config.numslock),
            capslock: controller(light_config.capslock),
            scrolllock: controller(light_config.scrolllock),
        }
    }

    /// Whether any LED is wired
    pub fn enabled(&self) -> bool {
        self.numslock.is_some() || self.capslock.is_some() || self.scrolllock.is_some()
    }

    fn leds(&mut self) -> [(LedIndicatorType, Option<&mut OutputController<P>>); 3] {
        [
            (LedIndicatorType::NumLock, self.numslock.as_mut()),
            (LedIndicatorType::CapsLock, self.capslock.as_mut()),
            (LedIndicatorType::ScrollLock, self.scrolllock.as_mut()),
        ]
    }

    /// Drive every LED to its flag in the lock state.
    ///
    /// Returns `false`: the state is fully handled here, nothing else should act on it.
    pub fn set_leds(&mut self, led_indicator: LedIndicator) -> bool {
        debug!("Set lock indicators: {:?}", led_indicator);
        for (indicator, led) in self.leds() {
            if let Some(led) = led {
                led.set_active(indicator.is_on(led_indicator));
            }
        }
        false
    }

    /// Startup animation: light the LEDs one by one, then turn them off one by one.
    ///
    /// Every LED is off afterwards.
    pub async fn blink_all<D: DelayNs>(&mut self, delay: &mut D) {
        let step = BLINK_STEP.as_millis() as u32;
        for (_, led) in self.leds() {
            if let Some(led) = led {
                led.activate();
                delay.delay_ms(step).await;
            }
        }
        for (_, led) in self.leds() {
            if let Some(led) = led {
                led.deactivate();
                delay.delay_ms(step).await;
            }
        }
    }

    /// Show every lock state received from the host
    pub async fn run(&mut self) {
        if !self.enabled() {
            info!("No lock indicator LED, light service is idle");
        }
        loop {
            let led_indicator = LED_INDICATOR_CHANNEL.receive().await;
            self.set_leds(led_indicator);
        }
    }
}
