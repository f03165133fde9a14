use proto_forge_core::types::{Method, Service};

use crate::lines::{braced, flat_map, line, LineStream};

const STREAM: &str = "stream ";

pub(super) fn render_service(service: &Service) -> LineStream<'_> {
    if service.methods.is_empty() {
        return line(format!("service {} {{}}", service.name));
    }

    braced(
        format!("service {} {{", service.name),
        flat_map(&service.methods, render_method_line),
    )
}

pub(super) fn render_method(method: &Method) -> LineStream<'_> {
    line(render_method_line(method))
}

/// `rpc Name([stream ]Input) returns ([stream ]Output);`
///
/// The two stream prefixes are derived independently from the streaming bits.
pub fn render_method_line(method: &Method) -> String {
    let instream = if method.streaming.streams_input() { STREAM } else { "" };
    let outstream = if method.streaming.streams_output() { STREAM } else { "" };
    format!(
        "rpc {}({instream}{}) returns ({outstream}{});",
        method.name, method.input_type, method.output_type
    )
}
