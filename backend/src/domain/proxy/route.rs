//! Route templates and proxied route declarations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::ProxyMethod;

/// Errors raised while parsing a route template or declaring a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTemplateError {
    /// Template contains `//` or is empty.
    #[error("route template `{template}` has an empty segment")]
    EmptySegment {
        /// Offending template.
        template: String,
    },
    /// A `{` without matching `}` or a `{}` placeholder.
    #[error("route template `{template}` has a malformed parameter")]
    MalformedParameter {
        /// Offending template.
        template: String,
    },
    /// The upstream template names a parameter the inbound one never captures.
    #[error("upstream template uses `{name}`, which the inbound template does not capture")]
    UnboundParameter {
        /// Parameter name.
        name: String,
    },
    /// A route was declared without any method.
    #[error("route `{template}` declares no methods")]
    NoMethods {
        /// Inbound template.
        template: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Path parameters captured while matching a template, in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    /// Value captured for `name`, as it appeared in the request path.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parsed `segment/{param}/segment` template. Leading and trailing slashes
/// are ignored.
///
/// # Examples
/// ```
/// use fleet_backend::domain::proxy::RouteTemplate;
///
/// let template: RouteTemplate = "vehicles/{id}/state".parse().expect("valid template");
/// let params = template.matches("/vehicles/42/state").expect("path matches");
/// assert_eq!(params.get("id"), Some("42"));
/// assert!(template.matches("/vehicles/42").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl FromStr for RouteTemplate {
    type Err = RouteTemplateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Err(RouteTemplateError::EmptySegment {
                template: raw.to_owned(),
            });
        }
        let segments = trimmed
            .split('/')
            .map(|segment| parse_segment(raw, segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            raw: trimmed.to_owned(),
            segments,
        })
    }
}

fn parse_segment(template: &str, segment: &str) -> Result<Segment, RouteTemplateError> {
    if segment.is_empty() {
        return Err(RouteTemplateError::EmptySegment {
            template: template.to_owned(),
        });
    }
    let malformed = || RouteTemplateError::MalformedParameter {
        template: template.to_owned(),
    };
    match segment.strip_prefix('{') {
        Some(rest) => {
            let name = rest.strip_suffix('}').ok_or_else(malformed)?;
            if name.is_empty() || name.contains(['{', '}']) {
                return Err(malformed());
            }
            Ok(Segment::Param(name.to_owned()))
        }
        None if segment.contains(['{', '}']) => Err(malformed()),
        None => Ok(Segment::Literal(segment.to_owned())),
    }
}

impl RouteTemplate {
    /// Match `path` segment by segment.
    ///
    /// Literal segments must be equal; parameters capture exactly one
    /// non-empty segment, kept in its raw form. A capture that decodes to a
    /// dot segment or to something containing a path separator does not
    /// match, so rendering can never step outside the upstream template.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let trimmed = path.trim_matches('/');
        let mut parts = trimmed.split('/');
        let mut params = Vec::new();
        for segment in &self.segments {
            let part = parts.next().filter(|part| !part.is_empty())?;
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if !is_plain_segment(part) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_owned())),
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Some(PathParams(params))
    }

    /// Render the template with `params`, producing a path with a leading
    /// slash. Returns `None` when a parameter is missing.
    #[must_use]
    pub fn render(&self, params: &PathParams) -> Option<String> {
        let mut rendered = String::with_capacity(self.raw.len() + 1);
        for segment in &self.segments {
            rendered.push('/');
            match segment {
                Segment::Literal(literal) => rendered.push_str(literal),
                Segment::Param(name) => rendered.push_str(params.get(name)?),
            }
        }
        Some(rendered)
    }

    /// Number of literal segments; used to prefer specific routes.
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }

    fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

/// Whether a captured segment stays a single, non-relative path segment once
/// percent escapes are decoded.
fn is_plain_segment(raw: &str) -> bool {
    let decoded = percent_decode(raw);
    !matches!(decoded.as_slice(), b"." | b"..")
        && !decoded.iter().any(|byte| matches!(byte, b'/' | b'\\'))
}

fn percent_decode(raw: &str) -> Vec<u8> {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        let escaped = (bytes[index] == b'%')
            .then(|| bytes.get(index + 1..index + 3))
            .flatten()
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                decoded.push(byte);
                index += 3;
            }
            None => {
                decoded.push(bytes[index]);
                index += 1;
            }
        }
    }
    decoded
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One forwarding declaration: inbound template, upstream template and the
/// methods the route accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRoute {
    inbound: RouteTemplate,
    upstream: RouteTemplate,
    methods: Vec<ProxyMethod>,
}

impl ProxyRoute {
    /// Declare a route.
    ///
    /// # Errors
    /// Returns [`RouteTemplateError`] when either template is malformed, the
    /// upstream template uses a parameter the inbound one does not capture,
    /// or `methods` is empty.
    pub fn new(
        inbound: &str,
        upstream: &str,
        methods: &[ProxyMethod],
    ) -> Result<Self, RouteTemplateError> {
        let inbound_template: RouteTemplate = inbound.parse()?;
        let upstream_template: RouteTemplate = upstream.parse()?;
        if let Some(name) = upstream_template
            .param_names()
            .find(|name| !inbound_template.param_names().any(|bound| bound == *name))
        {
            return Err(RouteTemplateError::UnboundParameter {
                name: name.to_owned(),
            });
        }
        if methods.is_empty() {
            return Err(RouteTemplateError::NoMethods {
                template: inbound.to_owned(),
            });
        }
        Ok(Self {
            inbound: inbound_template,
            upstream: upstream_template,
            methods: methods.to_vec(),
        })
    }

    /// Declare a route whose upstream path equals its inbound path.
    ///
    /// # Errors
    /// See [`ProxyRoute::new`].
    pub fn mirrored(template: &str, methods: &[ProxyMethod]) -> Result<Self, RouteTemplateError> {
        Self::new(template, template, methods)
    }

    /// Inbound template, relative to the `/api` mount.
    #[must_use]
    pub const fn inbound(&self) -> &RouteTemplate {
        &self.inbound
    }

    /// Upstream template, relative to the upstream base URL.
    #[must_use]
    pub const fn upstream(&self) -> &RouteTemplate {
        &self.upstream
    }

    /// Methods the route accepts.
    #[must_use]
    pub fn methods(&self) -> &[ProxyMethod] {
        &self.methods
    }

    /// Whether `method` is accepted.
    #[must_use]
    pub fn allows(&self, method: ProxyMethod) -> bool {
        self.methods.contains(&method)
    }
}
