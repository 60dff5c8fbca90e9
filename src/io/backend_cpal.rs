//! cpal-backed audio output.
//!
//! Owns the output stream and the realtime plumbing around it: the command
//! ring the engine retunes through, the frame counter that is the engine
//! clock, and an optional audio tap for visualization. The voice graph lives
//! inside the stream callback; dropping the stream tears the whole session
//! down as a unit.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};

use crate::graph::{BinauralVoice, RenderCtx, StereoNode, VoiceCommand, VoiceParams};
use crate::io::{AudioBackend, BackendError};
use crate::MAX_BLOCK_SIZE;

/// Capacity of the control->audio command ring.
const COMMAND_RING_LEN: usize = 64;

pub struct CpalBackend {
    device: cpal::Device,
    config: cpal::StreamConfig,
    sample_rate: f32,
    channels: usize,
    stream: Option<cpal::Stream>,
    commands: Option<Producer<VoiceCommand>>,
    /// Frames rendered since the backend was created. Monotonic across
    /// sessions; advances only while the callback runs.
    frames: Arc<AtomicU64>,
    /// Set by the error callback when the platform kills the stream.
    stalled: Arc<AtomicBool>,
    /// Audio->UI visualization tap. The callback is the only locker, so the
    /// try_lock never contends; UI code holds the consumer side.
    tap: Option<Arc<Mutex<Producer<f32>>>>,
}

impl CpalBackend {
    /// Probe the default host and output device. The stream itself is not
    /// built until `start` - graph construction belongs to the session.
    pub fn new() -> Result<Self, BackendError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(BackendError::NoOutputDevice)?;
        let supported = device
            .default_output_config()
            .map_err(|e| BackendError::StreamBuild(e.to_string()))?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(BackendError::StreamBuild(format!(
                "unsupported sample format {:?}",
                supported.sample_format()
            )));
        }

        let config: cpal::StreamConfig = supported.into();
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        Ok(Self {
            device,
            config,
            sample_rate,
            channels,
            stream: None,
            commands: None,
            frames: Arc::new(AtomicU64::new(0)),
            stalled: Arc::new(AtomicBool::new(false)),
            tap: None,
        })
    }

    /// Attach a visualization tap. The callback pushes the summed L+R signal
    /// and drops samples when the ring is full.
    pub fn with_tap(mut self, tap: Producer<f32>) -> Self {
        self.tap = Some(Arc::new(Mutex::new(tap)));
        self
    }
}

impl AudioBackend for CpalBackend {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn clock_seconds(&self) -> f64 {
        self.frames.load(Ordering::Relaxed) as f64 / self.sample_rate as f64
    }

    fn start(&mut self, params: VoiceParams) -> Result<(), BackendError> {
        // A leftover graph from a dead session must go before we build.
        self.stop();
        self.stalled.store(false, Ordering::SeqCst);

        let (tx, mut rx) = RingBuffer::<VoiceCommand>::new(COMMAND_RING_LEN);
        let mut voice = BinauralVoice::new(params);

        let frames = Arc::clone(&self.frames);
        let stalled = Arc::clone(&self.stalled);
        let tap = self.tap.clone();
        let sample_rate = self.sample_rate;
        let channels = self.channels;
        let ctx = RenderCtx::new(sample_rate);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE * 2];

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _| {
                    voice.apply_commands(&mut rx, sample_rate);

                    let total_frames = data.len() / channels;
                    let mut written = 0;
                    while written < total_frames {
                        let chunk = (total_frames - written).min(MAX_BLOCK_SIZE);
                        let block = &mut render_buf[..chunk * 2];
                        voice.render_block(block, &ctx);

                        // Map stereo frames onto the device channel layout:
                        // left and right stay hard-panned, extra channels
                        // are silent, a mono device gets the sum.
                        let out = &mut data[written * channels..(written + chunk) * channels];
                        for (i, frame) in block.chunks_exact(2).enumerate() {
                            let (l, r) = (frame[0], frame[1]);
                            if channels == 1 {
                                out[i] = 0.5 * (l + r);
                            } else {
                                out[i * channels] = l;
                                out[i * channels + 1] = r;
                                for ch in 2..channels {
                                    out[i * channels + ch] = 0.0;
                                }
                            }
                        }

                        if let Some(tap) = &tap {
                            if let Ok(mut tap_tx) = tap.try_lock() {
                                for frame in block.chunks_exact(2) {
                                    let _ = tap_tx.push(0.5 * (frame[0] + frame[1]));
                                }
                            }
                        }

                        written += chunk;
                    }

                    frames.fetch_add(total_frames as u64, Ordering::Relaxed);
                },
                move |err| {
                    log::error!("output stream error: {err}");
                    stalled.store(true, Ordering::SeqCst);
                },
                None,
            )
            .map_err(|e| BackendError::StreamBuild(e.to_string()))?;

        // Rollback is the drop of `stream` if play fails - nothing stays
        // connected to the sink.
        stream
            .play()
            .map_err(|e| BackendError::StreamPlay(e.to_string()))?;

        self.stream = Some(stream);
        self.commands = Some(tx);
        Ok(())
    }

    fn retune(&mut self, params: VoiceParams) -> Result<(), BackendError> {
        let Some(tx) = self.commands.as_mut() else {
            return Err(BackendError::NotActive);
        };
        if tx.push(VoiceCommand::Retune(params)).is_err() {
            // Ring full: the callback is behind. Dropping the update is
            // harmless, the next one carries the full parameter set.
            log::warn!("command ring full; retune dropped");
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.commands = None;
        self.stream = None;
    }

    fn resume(&mut self) -> Result<(), BackendError> {
        // TODO: rebuild the stream here after a device disconnect instead of
        // requiring a manual restart.
        if self.stalled.load(Ordering::SeqCst) {
            return Err(BackendError::Resume("stream stalled after a device error".into()));
        }
        match &self.stream {
            Some(stream) => stream
                .play()
                .map_err(|e| BackendError::Resume(e.to_string())),
            None => Err(BackendError::NotActive),
        }
    }

    fn is_live(&self) -> bool {
        self.stream.is_some() && !self.stalled.load(Ordering::SeqCst)
    }
}
