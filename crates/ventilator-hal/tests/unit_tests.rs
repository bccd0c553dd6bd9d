//! Unit tests for the HAL fake and pin types.

#![cfg(test)]

use ventilator_hal::prelude::*;

mod time {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() -> Result<(), Box<dyn std::error::Error>> {
        let hal = FakeHal::new();
        assert_eq!(hal.millis(), 0);
        Ok(())
    }

    #[test]
    fn test_millis_is_stable_without_delay() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.delay(42);
        for _ in 0..100 {
            assert_eq!(hal.millis(), 42);
        }
        Ok(())
    }

    #[test]
    fn test_zero_delay_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.delay(0);
        assert_eq!(hal.millis(), 0);
        Ok(())
    }

    #[test]
    fn test_delay_sums() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        for ms in [1, 10, 100, 1_000] {
            hal.delay(ms);
        }
        assert_eq!(hal.millis(), 1_111);
        Ok(())
    }

    #[test]
    fn test_counter_wraps_like_hardware() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.test_set_millis(u32::MAX);
        hal.delay(1);
        assert_eq!(hal.millis(), 0);
        Ok(())
    }

    #[test]
    fn test_delay_ms_through_embedded_hal() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        DelayNs::delay_ms(&mut hal, 15);
        assert_eq!(hal.millis(), 15);
        Ok(())
    }
}

mod analog {
    use super::*;

    #[test]
    fn test_unset_pins_read_zero() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        for pin in AnalogPinId::ALL {
            assert_eq!(hal.analog_read(pin), 0);
        }
        Ok(())
    }

    #[test]
    fn test_read_is_repeatable() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.test_set_analog_pin(AnalogPinId::A5, 1_000);
        assert_eq!(hal.analog_read(AnalogPinId::A5), 1_000);
        assert_eq!(hal.analog_read(AnalogPinId::A5), 1_000);
        Ok(())
    }

    #[test]
    fn test_last_injection_wins() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.test_set_analog_pin(AnalogPinId::A0, 10);
        hal.test_set_analog_pin(AnalogPinId::A0, 20);
        assert_eq!(hal.analog_read(AnalogPinId::A0), 20);
        Ok(())
    }

    #[test]
    fn test_pwm_write_does_not_touch_analog_inputs() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.test_set_analog_pin(AnalogPinId::A3, 77);
        hal.analog_write(PwmPinId::Pwm3, 200);
        assert_eq!(hal.analog_read(AnalogPinId::A3), 77);
        assert_eq!(hal.test_pwm_value(PwmPinId::Pwm3), 200);
        Ok(())
    }
}

mod digital {
    use super::*;

    #[test]
    fn test_pins_default_to_input_low() -> Result<(), Box<dyn std::error::Error>> {
        let hal = FakeHal::new();
        for pin in DigitalPinId::ALL {
            assert_eq!(hal.digital_pin_mode(pin), PinMode::Input);
            assert_eq!(hal.test_digital_level(pin), VoltageLevel::Low);
        }
        Ok(())
    }

    #[test]
    fn test_write_to_output_pin() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.set_digital_pin_mode(DigitalPinId::D4, PinMode::Output);
        hal.try_digital_write(DigitalPinId::D4, VoltageLevel::High)?;
        assert_eq!(hal.test_digital_level(DigitalPinId::D4), VoltageLevel::High);
        hal.digital_write(DigitalPinId::D4, VoltageLevel::Low);
        assert_eq!(hal.test_digital_level(DigitalPinId::D4), VoltageLevel::Low);
        Ok(())
    }

    #[test]
    fn test_write_to_pullup_pin_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.set_digital_pin_mode(DigitalPinId::D2, PinMode::InputPullup);
        let result = hal.try_digital_write(DigitalPinId::D2, VoltageLevel::High);
        assert_eq!(
            result,
            Err(HalError::PinNotOutput {
                pin: DigitalPinId::D2,
                mode: PinMode::InputPullup,
            })
        );
        assert_eq!(hal.test_digital_level(DigitalPinId::D2), VoltageLevel::Low);
        Ok(())
    }

    #[test]
    fn test_mode_change_is_recorded() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.set_digital_pin_mode(DigitalPinId::D9, PinMode::Output);
        assert_eq!(hal.test_digital_mode(DigitalPinId::D9), PinMode::Output);
        hal.set_digital_pin_mode(DigitalPinId::D9, PinMode::Input);
        assert_eq!(hal.test_digital_mode(DigitalPinId::D9), PinMode::Input);
        Ok(())
    }
}

mod pins {
    use super::*;

    #[test]
    fn test_pwm_pins_map_to_digital() -> Result<(), Box<dyn std::error::Error>> {
        let numbers: Vec<u8> = PwmPinId::ALL.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, [3, 5, 6, 9, 10, 11]);
        for pwm in PwmPinId::ALL {
            assert_eq!(DigitalPinId::from(pwm).number(), pwm.number());
        }
        Ok(())
    }

    #[test]
    fn test_lookup_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(DigitalPinId::from_number(14), None);
        assert_eq!(AnalogPinId::from_channel(6), None);
        assert_eq!(PwmPinId::from_number(4), None);
        Ok(())
    }

    #[test]
    fn test_display_names() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(DigitalPinId::D13.to_string(), "D13");
        assert_eq!(AnalogPinId::A4.to_string(), "A4");
        assert_eq!(PwmPinId::Pwm10.to_string(), "PWM10");
        assert_eq!(PinMode::InputPullup.to_string(), "INPUT_PULLUP");
        assert_eq!(VoltageLevel::High.to_string(), "HIGH");
        Ok(())
    }
}

mod config {
    use super::*;

    #[test]
    fn test_fake_from_config() -> Result<(), Box<dyn std::error::Error>> {
        let config = FakeHalConfig::builder()
            .start_millis(5_000)
            .analog(AnalogPinId::A1, 333)
            .build()?;
        let mut hal = FakeHal::with_config(&config)?;
        assert_eq!(hal.millis(), 5_000);
        assert_eq!(hal.analog_read(AnalogPinId::A1), 333);
        assert_eq!(hal.analog_read(AnalogPinId::A0), 0);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let config = FakeHalConfig {
            analog_values: [0, 0, ADC_MAX + 1, 0, 0, 0],
            ..FakeHalConfig::default()
        };
        assert!(matches!(
            FakeHal::with_config(&config),
            Err(HalError::InvalidConfiguration(_))
        ));
        Ok(())
    }

    #[test]
    fn test_reset_returns_to_power_on() -> Result<(), Box<dyn std::error::Error>> {
        let mut hal = FakeHal::new();
        hal.delay(99);
        hal.test_set_analog_pin(AnalogPinId::A2, 9);
        hal.set_digital_pin_mode(DigitalPinId::D7, PinMode::Output);
        hal.digital_write(DigitalPinId::D7, VoltageLevel::High);
        hal.reset();
        assert_eq!(hal, FakeHal::default());
        Ok(())
    }
}
