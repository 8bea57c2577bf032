//! Status code to identifier phrase lookup.

/// Maps an HTTP status code string to an identifier-safe PascalCase phrase.
///
/// Returns `None` for codes the table does not know. The `"default"` response
/// code is handled by the generator and never reaches the lookup.
pub trait StatusPhrases {
    /// Phrase for `code`, e.g. `"NotFound"` for `"404"`.
    fn phrase(&self, code: &str) -> Option<&str>;
}

/// The standard IANA status code table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpStatusPhrases;

impl StatusPhrases for HttpStatusPhrases {
    fn phrase(&self, code: &str) -> Option<&str> {
        let phrase = match code {
            "100" => "Continue",
            "101" => "SwitchingProtocols",
            "102" => "Processing",
            "103" => "EarlyHints",
            "200" => "Ok",
            "201" => "Created",
            "202" => "Accepted",
            "203" => "NonAuthoritativeInformation",
            "204" => "NoContent",
            "205" => "ResetContent",
            "206" => "PartialContent",
            "207" => "MultiStatus",
            "208" => "AlreadyReported",
            "226" => "ImUsed",
            "300" => "MultipleChoices",
            "301" => "MovedPermanently",
            "302" => "Found",
            "303" => "SeeOther",
            "304" => "NotModified",
            "305" => "UseProxy",
            "307" => "TemporaryRedirect",
            "308" => "PermanentRedirect",
            "400" => "BadRequest",
            "401" => "Unauthorized",
            "402" => "PaymentRequired",
            "403" => "Forbidden",
            "404" => "NotFound",
            "405" => "MethodNotAllowed",
            "406" => "NotAcceptable",
            "407" => "ProxyAuthenticationRequired",
            "408" => "RequestTimeout",
            "409" => "Conflict",
            "410" => "Gone",
            "411" => "LengthRequired",
            "412" => "PreconditionFailed",
            "413" => "PayloadTooLarge",
            "414" => "UriTooLong",
            "415" => "UnsupportedMediaType",
            "416" => "RangeNotSatisfiable",
            "417" => "ExpectationFailed",
            "418" => "ImATeapot",
            "421" => "MisdirectedRequest",
            "422" => "UnprocessableEntity",
            "423" => "Locked",
            "424" => "FailedDependency",
            "425" => "TooEarly",
            "426" => "UpgradeRequired",
            "428" => "PreconditionRequired",
            "429" => "TooManyRequests",
            "431" => "RequestHeaderFieldsTooLarge",
            "451" => "UnavailableForLegalReasons",
            "500" => "InternalServerError",
            "501" => "NotImplemented",
            "502" => "BadGateway",
            "503" => "ServiceUnavailable",
            "504" => "GatewayTimeout",
            "505" => "HttpVersionNotSupported",
            "506" => "VariantAlsoNegotiates",
            "507" => "InsufficientStorage",
            "508" => "LoopDetected",
            "510" => "NotExtended",
            "511" => "NetworkAuthenticationRequired",
            _ => return None,
        };
        Some(phrase)
    }
}
