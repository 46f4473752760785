// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) struct Grammar;

impl Grammar {
    fn match_alpha(s: &str) -> Option<(&str, &str)> {
        if !s.is_empty() && s.as_bytes()[0].is_ascii_alphabetic() {
            Some((&s[0..1], &s[1..]))
        } else {
            None
        }
    }

    fn match_scheme_chars(s: &str) -> (&str, &str) {
        let len = s
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
            .count();
        (&s[0..len], &s[len..])
    }

    /// Matches `scheme ":"`, returning the scheme token and the tail after
    /// the colon
    pub fn match_scheme(s: &str) -> Option<(&str, &str)> {
        let (h, t) = Self::match_alpha(s)?;
        let (hh, tt) = Self::match_scheme_chars(t);
        let rest = tt.strip_prefix(':')?;
        Some((&s[0..h.len() + hh.len()], rest))
    }

    /// Splits a hierarchical URI reference (`scheme://...`) into
    /// `(scheme, netloc, path, query, fragment)`. Components are not
    /// interpreted or decoded.
    pub fn split_uri(s: &str) -> Option<(&str, &str, &str, Option<&str>, Option<&str>)> {
        let (scheme, rest) = Self::match_scheme(s)?;
        let rest = rest.strip_prefix("//")?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((r, f)) => (r, Some(f)),
            None => (rest, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((r, q)) => (r, Some(q)),
            None => (rest, None),
        };
        let (netloc, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        Some((scheme, netloc, path, query, fragment))
    }

    /// Decomposes an authority into `(userinfo, host, port token)`. The port
    /// token is everything after the last `:` outside an IPv6 bracket pair
    /// and may be empty.
    pub fn split_authority(netloc: &str) -> (Option<&str>, &str, Option<&str>) {
        let (userinfo, hostport) = match netloc.rfind('@') {
            Some(i) => (Some(&netloc[..i]), &netloc[i + 1..]),
            None => (None, netloc),
        };

        let port_at = match (hostport.rfind(':'), hostport.rfind(']')) {
            (Some(colon), Some(bracket)) if colon < bracket => None,
            (Some(colon), _) => Some(colon),
            (None, _) => None,
        };

        match port_at {
            Some(i) => (userinfo, &hostport[..i], Some(&hostport[i + 1..])),
            None => (userinfo, hostport, None),
        }
    }
}
