//! crates/debug-output/src/context.rs
//! GL-shaped entry points and implementation-side reporting on a context.
//!
//! Entry points take raw enum values and sizes, validate them, and forward to
//! the context's [`DebugState`]. They never return errors: misuse records an
//! error code on the context, retrievable once through
//! [`Context::get_error`], and is reported as an API error message through
//! the same filter path clients configure.

use std::sync::Arc;

use logging_sink::LineMode;

use crate::delivery::DebugCallback;
use crate::echo::{ECHO_PREFIX, Echo, USER_ERROR_PREFIX, WARNING_PREFIX};
use crate::enums::{MessageType, Severity, Source};
use crate::error::{DebugError, ErrorCode};
use crate::gl::{GL_NO_ERROR, GLenum, GLsizei, GLuint};
use crate::id::DynamicId;
use crate::limits::DebugLimits;
use crate::message::{LogRecord, MessageHeader};
use crate::state::DebugState;
use crate::validate::{self, Caller};

/// Shared ID of every API error reported through [`Context::report_error`].
static ERROR_MESSAGE_ID: DynamicId = DynamicId::new();

/// The slice of a graphics context that owns debug output.
///
/// The debug state is created on first use by an entry point and lives
/// until the context is dropped or [`reset_debug_state`](Self::reset_debug_state)
/// is called.
#[derive(Debug)]
pub struct Context {
    debug: Option<DebugState>,
    limits: DebugLimits,
    error: Option<ErrorCode>,
    echo: Arc<Echo>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Context with default limits, echoing through the process echo.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(DebugLimits::default())
    }

    /// Context whose debug state will use `limits`.
    #[must_use]
    pub fn with_limits(limits: DebugLimits) -> Self {
        Self {
            debug: None,
            limits,
            error: None,
            echo: Echo::global(),
        }
    }

    /// Replaces the echo destination.
    #[must_use]
    pub fn with_echo(mut self, echo: Arc<Echo>) -> Self {
        self.echo = echo;
        self
    }

    // ------------------------------------------------------------------
    // Debug state lifecycle
    // ------------------------------------------------------------------

    /// Debug state, created with the context's limits on first access.
    pub fn debug_state(&mut self) -> &mut DebugState {
        let limits = self.limits;
        self.debug.get_or_insert_with(|| DebugState::new(limits))
    }

    /// Debug state, only if something already created it.
    #[must_use]
    pub const fn debug_state_if_created(&self) -> Option<&DebugState> {
        self.debug.as_ref()
    }

    /// Tears down the debug state, every group level and queued message
    /// included.
    pub fn free_debug_state(&mut self) {
        self.debug = None;
    }

    /// Discards the debug state; the next access starts from a fresh one.
    pub fn reset_debug_state(&mut self) {
        self.free_debug_state();
    }

    // ------------------------------------------------------------------
    // Error recording
    // ------------------------------------------------------------------

    /// Returns and clears the recorded error, `GL_NO_ERROR` when none.
    pub fn get_error(&mut self) -> GLenum {
        self.error.take().map_or(GL_NO_ERROR, ErrorCode::to_gl)
    }

    /// Recorded error without clearing it.
    #[must_use]
    pub const fn pending_error(&self) -> Option<ErrorCode> {
        self.error
    }

    /// Records `code` unless an earlier error is still pending.
    pub fn record_error(&mut self, code: ErrorCode) {
        self.error.get_or_insert(code);
    }

    fn fail(&mut self, err: &DebugError) {
        self.report_error(err.code(), err.caller(), &err.to_string());
    }

    // ------------------------------------------------------------------
    // Client entry points
    // ------------------------------------------------------------------

    /// `glDebugMessageInsert`.
    ///
    /// A negative `length` takes `buf` up to its first NUL byte.
    pub fn debug_message_insert(
        &mut self,
        source: GLenum,
        ty: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        buf: &[u8],
    ) {
        let params = match validate::validate_insert(source, ty, severity) {
            Ok(params) => params,
            Err(err) => return self.fail(&err),
        };
        let header = MessageHeader::new(params.source, params.ty, id, params.severity);
        let text = message_text(length, buf);
        if let Err(err) = self.debug_state().insert(header, text) {
            self.fail(&err);
        }
    }

    /// `glGetDebugMessageLog`.
    ///
    /// Retrieves up to `count` messages into the first `log_size` bytes of
    /// `message_log`. Without a buffer, only the oldest message's length is
    /// reported and nothing is consumed.
    pub fn get_debug_message_log(
        &mut self,
        count: GLuint,
        log_size: GLsizei,
        message_log: Option<&mut [u8]>,
    ) -> Vec<LogRecord> {
        let log_size = if message_log.is_some() { log_size } else { 0 };
        let Ok(capacity) = usize::try_from(log_size) else {
            self.fail(&DebugError::NegativeLogSize {
                caller: Caller::GetLog.name(),
                log_size,
            });
            return Vec::new();
        };
        let Some(state) = self.debug.as_mut() else {
            return Vec::new();
        };
        let buf = message_log.map(|log| {
            let end = capacity.min(log.len());
            &mut log[..end]
        });
        state.get_message_log(count as usize, buf)
    }

    /// `glDebugMessageControl`.
    ///
    /// A non-empty `ids` list sets those IDs directly and needs a concrete
    /// source and type with a `GL_DONT_CARE` severity.
    pub fn debug_message_control(
        &mut self,
        source: GLenum,
        ty: GLenum,
        severity: GLenum,
        ids: &[GLuint],
        enabled: bool,
    ) {
        let params = match validate::validate_control(source, ty, severity) {
            Ok(params) => params,
            Err(err) => return self.fail(&err),
        };
        let result = self
            .debug_state()
            .control(params.source, params.ty, params.severity, ids, enabled);
        if let Err(err) = result {
            self.fail(&err);
        }
    }

    /// `glDebugMessageCallback`. `None` returns to buffered delivery.
    pub fn debug_message_callback(&mut self, callback: Option<DebugCallback>) {
        self.debug_state().set_callback(callback);
    }

    /// `glPushDebugGroup`.
    pub fn push_debug_group(&mut self, source: GLenum, id: GLuint, length: GLsizei, message: &[u8]) {
        let text = message_text(length, message);
        let state = self.debug_state();
        let result = if state.can_push_group() {
            validate::validate_group_source(source).and_then(|source| state.push_group(source, id, text))
        } else {
            Err(DebugError::StackOverflow {
                caller: Caller::PushGroup.name(),
            })
        };
        if let Err(err) = result {
            self.fail(&err);
        }
    }

    /// `glPopDebugGroup`.
    pub fn pop_debug_group(&mut self) {
        if let Err(err) = self.debug_state().pop_group() {
            self.fail(&err);
        }
    }

    /// Enables or disables `GL_DEBUG_OUTPUT`.
    pub fn set_debug_output(&mut self, enabled: bool) {
        self.debug_state().set_output_enabled(enabled);
    }

    /// Whether `GL_DEBUG_OUTPUT` is enabled; true before any state exists.
    #[must_use]
    pub fn is_debug_output_enabled(&self) -> bool {
        self.debug.as_ref().is_none_or(DebugState::output_enabled)
    }

    // ------------------------------------------------------------------
    // Implementation-side reporting
    // ------------------------------------------------------------------

    fn max_text_len(&self) -> usize {
        self.limits.max_message_length().saturating_sub(1)
    }

    /// Records a client error, echoes it, and logs it as an API error.
    ///
    /// `site` identifies the reporting location for echo throttling, which
    /// is shared by every context on the same [`Echo`]. The
    /// logged text reads `"<GL_ERROR_NAME> in <detail>"`, cut off at the
    /// message limit. Reports never create the debug state.
    pub fn report_error(&mut self, code: ErrorCode, site: &'static str, detail: &str) {
        let header = MessageHeader::new(
            Source::Api,
            MessageType::Error,
            ERROR_MESSAGE_ID.resolve(),
            Severity::High,
        );
        let do_output = self.echo.should_output_error(code, site);
        let do_log = self
            .debug
            .as_mut()
            .is_some_and(|state| state.should_log(&header));

        if do_output || do_log {
            let text = format!("{} in {detail}", code.name());
            if do_output {
                self.echo.emit(USER_ERROR_PREFIX, &text, LineMode::WithNewline);
            }
            let max = self.max_text_len();
            if let Some(state) = self.debug.as_mut().filter(|_| do_log) {
                state.deliver(header, truncate(text.as_bytes(), max));
            }
        }

        self.record_error(code);
    }

    /// Logs an API-sourced message under the call site's lazily assigned ID.
    ///
    /// Text beyond the message limit is cut off.
    pub fn gl_debug(&mut self, id: &DynamicId, ty: MessageType, severity: Severity, text: &str) {
        let header = MessageHeader::new(Source::Api, ty, id.resolve(), severity);
        let text = truncate(text.as_bytes(), self.max_text_len());
        if let Some(state) = self.debug.as_mut() {
            state.log(header, text);
        }
    }

    /// Logs a shader compiler message at high severity, cutting off text
    /// beyond the message limit instead of rejecting it.
    pub fn shader_debug(&mut self, ty: MessageType, id: &DynamicId, msg: &[u8]) {
        let header = MessageHeader::new(Source::ShaderCompiler, ty, id.resolve(), Severity::High);
        let text = truncate(msg, self.max_text_len());
        if let Some(state) = self.debug.as_mut() {
            state.log(header, text);
        }
    }

    /// Echoes a recoverable problem, flushing any pending error repeats first.
    pub fn warning(&self, text: &str) {
        self.echo.flush_repeats();
        self.echo.emit(WARNING_PREFIX, text, LineMode::WithNewline);
    }

    /// Echoes a debugging note without a trailing newline. Debug builds only.
    pub fn debug(&self, text: &str) {
        if cfg!(debug_assertions) {
            self.echo.emit(ECHO_PREFIX, text, LineMode::WithoutNewline);
        }
    }
}

fn message_text(length: GLsizei, buf: &[u8]) -> &[u8] {
    match usize::try_from(length) {
        Ok(length) => &buf[..length.min(buf.len())],
        Err(_) => buf.split(|&byte| byte == 0).next().unwrap_or_default(),
    }
}

fn truncate(text: &[u8], max: usize) -> &[u8] {
    &text[..text.len().min(max)]
}
