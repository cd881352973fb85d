//! Streaming render loop.

use log::{debug, info};

use gngplot_core::frame::GraphFrame;

use crate::{GngplotError, render::Renderer};

/// Drives a [`Renderer`] through a stream of frames.
#[derive(Debug, Default)]
pub struct Animator;

impl Animator {
    pub fn new() -> Self {
        Self
    }

    /// Renders every frame the stream yields, in order, and returns how many
    /// were rendered.
    ///
    /// The loop ends when `frames` does. The renderer keeps showing the last
    /// frame afterwards.
    ///
    /// # Errors
    ///
    /// Stops at the first read or render error and returns it.
    pub fn run<I>(&self, frames: I, renderer: &mut dyn Renderer) -> Result<usize, GngplotError>
    where
        I: IntoIterator<Item = Result<GraphFrame, GngplotError>>,
    {
        info!("Starting animation");
        let mut rendered = 0;

        for frame in frames {
            let frame = frame?;
            renderer.render_frame(&frame)?;
            rendered += 1;
            debug!(frame = rendered, edges = frame.edge_count(), nodes = frame.node_count(); "Frame rendered");
        }

        info!(frames = rendered; "Animation finished");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::{RenderError, source::GraphFrameSource};

    const LINE_A: &str = r#"{"nodes": {"a": [0,0], "b": [1,1]}, "edges": [["a","b"]]}"#;
    const LINE_B: &str = r#"{"nodes": {"a": [2,0], "b": [1,3], "c": [0,0]}, "edges": [["a","c"]]}"#;

    /// Records protocol calls and the node count of every drawn frame.
    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
        fail_at: Option<usize>,
        drawn: usize,
    }

    impl Renderer for Recording {
        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn draw(&mut self, frame: &GraphFrame) -> Result<(), RenderError> {
            self.drawn += 1;
            if self.fail_at == Some(self.drawn) {
                return Err(RenderError::MissingNode("ghost".into()));
            }
            self.calls.push(format!("draw {}", frame.node_count()));
            Ok(())
        }

        fn refresh(&mut self) -> Result<(), RenderError> {
            self.calls.push("refresh".to_string());
            Ok(())
        }
    }

    fn frames(text: String) -> crate::source::Frames {
        GraphFrameSource::from_reader(Cursor::new(text)).frames()
    }

    #[test]
    fn test_two_frames_then_partial_line() {
        let mut renderer = Recording::default();
        let text = format!("{LINE_A}\n{LINE_B}\n{{\"nodes\": {{");

        let count = Animator::new().run(frames(text), &mut renderer).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            renderer.calls,
            ["clear", "draw 2", "refresh", "clear", "draw 3", "refresh"]
        );
    }

    #[test]
    fn test_empty_stream_renders_nothing() {
        let mut renderer = Recording::default();
        let count = Animator::new()
            .run(frames(String::new()), &mut renderer)
            .unwrap();

        assert_eq!(count, 0);
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_render_error_aborts_loop() {
        let mut renderer = Recording {
            fail_at: Some(2),
            ..Default::default()
        };
        let text = format!("{LINE_A}\n{LINE_B}\n{LINE_A}\n");

        let err = Animator::new().run(frames(text), &mut renderer).unwrap_err();

        assert!(matches!(err, GngplotError::Render(RenderError::MissingNode(_))));
        assert_eq!(renderer.drawn, 2);
    }

    #[test]
    fn test_read_error_is_returned() {
        let mut renderer = Recording::default();
        let stream = vec![
            Ok(GraphFrame::default()),
            Err(GngplotError::Io(io::Error::other("gone"))),
        ];

        let err = Animator::new().run(stream, &mut renderer).unwrap_err();

        assert!(matches!(err, GngplotError::Io(_)));
        assert_eq!(renderer.calls, ["clear", "draw 0", "refresh"]);
    }
}
