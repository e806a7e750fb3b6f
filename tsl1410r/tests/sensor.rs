use claims::*;
use tsl1410r::{Acquisition, Error, FrameBuffer, SensorIo, SENSOR_PIXEL_COUNT};
use utilities::{dark_profile, gradient_profile, MockIo, SimSensor, GRADIENT_STEP};

#[test]
fn full_resolution_reads_every_pixel_in_order() {
    let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
    let mut pix = [0u16; SENSOR_PIXEL_COUNT];

    assert_ok!(sensor.read(&mut pix, SENSOR_PIXEL_COUNT, 0));
    for (i, px) in pix.iter().enumerate() {
        assert_eq!(*px, GRADIENT_STEP * i as u16);
    }
}

#[test]
fn decimation_samples_every_stride() {
    // 1280 / 320 leaves a stride of 4
    let n = 320;
    let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
    let mut pix = [0u16; SENSOR_PIXEL_COUNT];

    assert_ok!(sensor.read(&mut pix, n, 0));
    for i in 0..n {
        assert_eq!(pix[i], GRADIENT_STEP * (i * 4) as u16, "sample {}", i);
    }
}

#[test]
fn every_even_divisor_yields_n_samples() {
    for n in [1usize, 2, 5, 64, 128, 256, 640, 1280] {
        assert_eq!(SENSOR_PIXEL_COUNT % n, 0);
        let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
        let mut pix = vec![0u16; n];
        assert_ok!(sensor.read(&mut pix, n, 0));
        let stride = SENSOR_PIXEL_COUNT / n;
        for i in 0..n {
            assert_eq!(pix[i], GRADIENT_STEP * (i * stride) as u16);
        }
    }
}

#[test]
fn uneven_sample_count_never_reads_past_the_tail() {
    // stride = floor(1280 / 300) = 4, so the last sampled pixel is 299 * 4
    let n = 300;
    let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
    let mut pix = vec![0u16; n];

    assert_ok!(sensor.read(&mut pix, n, 0));
    assert_eq!(pix[n - 1], GRADIENT_STEP * ((n - 1) * 4) as u16);
}

#[test]
fn rejects_invalid_arguments() {
    let mut sensor = SimSensor::unlit().open_sensor();
    let mut pix = [0u16; 16];

    assert!(matches!(
        sensor.read(&mut pix, 0, 0),
        Err(Error::InvalidSampleCount(0))
    ));
    assert!(matches!(
        sensor.read(&mut pix, SENSOR_PIXEL_COUNT + 1, 0),
        Err(Error::InvalidSampleCount(_))
    ));
    assert!(matches!(
        sensor.read(&mut pix, 32, 0),
        Err(Error::PixelBufferTooSmall { need: 32, got: 16 })
    ));
}

#[test]
fn clear_is_idempotent() {
    let mut sensor = SimSensor::unlit().open_sensor();

    assert_ok!(sensor.clear());
    let mut once = [0u16; 64];
    assert_ok!(sensor.read(&mut once, 64, 0));

    assert_ok!(sensor.clear());
    assert_ok!(sensor.clear());
    let mut twice = [0u16; 64];
    assert_ok!(sensor.read(&mut twice, 64, 0));

    assert_eq!(once, twice);
    assert!(once.iter().all(|px| *px == 0));
}

#[test]
fn clear_flushes_the_whole_register() {
    let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
    assert_ok!(sensor.clear());
    let sim = sensor.into_inner();
    assert!(sim.is_flushed());
    // Start marker load plus one pulse per physical pixel
    assert_eq!(sim.clock_pulses(), 1 + SENSOR_PIXEL_COUNT as u64);
}

#[test]
fn integration_time_extends_the_hold() {
    let mut sensor = SimSensor::new(dark_profile()).open_sensor();
    let mut pix = [0u16; 64];
    assert_ok!(sensor.read(&mut pix, 64, 0));
    let baseline = sensor.into_inner().elapsed_us();

    let mut sensor = SimSensor::new(dark_profile()).open_sensor();
    let mut pix = [0u16; 64];
    assert_ok!(sensor.read(&mut pix, 64, 2_500));
    let extended = sensor.into_inner().elapsed_us();

    assert_eq!(extended - baseline, 2_500);
}

#[test]
fn sampling_failure_propagates_and_parks_the_lines() {
    let mut io = MockIo::new();
    io.expect_resolution_bits().return_const(16u8);
    io.expect_delay_us().returning(|_| ());
    io.expect_set_clk().returning(|_| Ok(()));
    // The teardown guard must drop SI low even though sampling failed
    io.expect_set_si().times(2..).returning(|_| Ok(()));
    io.expect_sample().returning(|| Err(Error::Pin));

    let mut sensor = io.open_sensor();
    let mut pix = [0u16; 8];
    assert!(matches!(sensor.read(&mut pix, 8, 0), Err(Error::Pin)));
}

#[test]
fn capture_tracks_the_requested_length() {
    let mut sensor = SimSensor::new(gradient_profile()).open_sensor();
    let mut frame = FrameBuffer::new();
    assert!(frame.is_empty());

    let acq = Acquisition {
        n: 128,
        integrate_us: 0,
    };
    assert_ok!(frame.capture(&mut sensor, &acq));
    assert_eq!(frame.len(), 128);
    assert_eq!(frame.pixels().len(), 128);
    // stride 10, so the second logical sample is physical pixel 10
    assert_eq!(frame.pixels()[1], GRADIENT_STEP * 10);
}
