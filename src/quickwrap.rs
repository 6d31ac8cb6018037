//! Quick-wrap button store: an ordered list of named (prefix, postfix)
//! pairs, persisted as one flat string in a bespoke tagged format.
//!
//! Wire format, bit-exact and stable:
//! `##WBUTTON####WBLABEL##label##/WBLABEL####WBPREFIX##prefix##/WBPREFIX####WBPOSTFIX##postfix##/WBPOSTFIX####/WBUTTON##`
//! repeated per button with no separators. The tags themselves are not
//! escaped, so field values must not contain them; this representational
//! limitation is inherited from the on-disk format and deliberately not
//! "fixed" here.

const BUTTON_OPEN: &str = "##WBUTTON##";
const BUTTON_CLOSE: &str = "##/WBUTTON##";
const LABEL_TAG: &str = "WBLABEL";
const PREFIX_TAG: &str = "WBPREFIX";
const POSTFIX_TAG: &str = "WBPOSTFIX";

/// A named wrap shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickWrapButton {
    pub label: String,
    pub prefix: String,
    pub postfix: String,
}

/// Ordered quick-wrap button list over its serialized representation.
/// Labels are unique: saving an existing label replaces the old entry.
/// A malformed or empty blob reads as zero buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickWrapStore {
    serialized: String,
}

impl QuickWrapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_serialized(serialized: impl Into<String>) -> Self {
        Self {
            serialized: serialized.into(),
        }
    }

    /// The persisted flat string
    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    /// Store a button config. A pre-existing button with the same label is
    /// removed first; the new config is appended, or prepended when
    /// `promote_to_front` is set (most-recently-used position).
    pub fn save(&mut self, label: &str, prefix: &str, postfix: &str, promote_to_front: bool) {
        if label.is_empty() {
            return;
        }
        self.remove(label);

        let config = render_button_config(label, prefix, postfix);
        if promote_to_front {
            self.serialized = format!("{}{}", config, self.serialized);
        } else {
            self.serialized.push_str(&config);
        }
    }

    /// Remove the button with the given label; no-op when absent. With
    /// duplicate labels the last matching entry wins.
    pub fn remove(&mut self, label: &str) {
        let labels = self.labels();
        let Some(remove_index) = labels.iter().rposition(|l| l == label) else {
            return;
        };

        // Rebuild from the fragments between button-opening tag sequences,
        // omitting the one at the found index
        let open_sequence = format!("{}{}", BUTTON_OPEN, open_tag(LABEL_TAG));
        let fragments: Vec<&str> = self.serialized.split(open_sequence.as_str()).collect();
        let mut rebuilt = String::new();
        for (index, fragment) in fragments.iter().enumerate().skip(1) {
            if index != remove_index + 1 {
                rebuilt.push_str(&open_sequence);
                rebuilt.push_str(fragment);
            }
        }

        self.serialized = rebuilt;
    }

    /// Move an existing button to the most-recently-used (front) position
    pub fn promote_to_front(&mut self, label: &str) {
        let Some(button) = self.get(label) else {
            return;
        };
        self.remove(label);
        self.save(&button.label, &button.prefix, &button.postfix, true);
    }

    /// Button with the given label, if stored
    pub fn get(&self, label: &str) -> Option<QuickWrapButton> {
        let labels = self.labels();
        let index = labels.iter().position(|l| l == label)?;
        let prefixes = self.prefixes();
        let postfixes = self.postfixes();

        Some(QuickWrapButton {
            label: labels.into_iter().nth(index)?,
            prefix: prefixes.into_iter().nth(index).unwrap_or_default(),
            postfix: postfixes.into_iter().nth(index).unwrap_or_default(),
        })
    }

    /// All stored buttons in order
    pub fn buttons(&self) -> Vec<QuickWrapButton> {
        let labels = self.labels();
        let prefixes = self.prefixes();
        let postfixes = self.postfixes();

        labels
            .into_iter()
            .zip(prefixes)
            .zip(postfixes)
            .map(|((label, prefix), postfix)| QuickWrapButton {
                label,
                prefix,
                postfix,
            })
            .collect()
    }

    /// All stored labels, in appearance order
    pub fn labels(&self) -> Vec<String> {
        self.attributes(LABEL_TAG)
    }

    /// All stored prefixes, in appearance order
    pub fn prefixes(&self) -> Vec<String> {
        self.attributes(PREFIX_TAG)
    }

    /// All stored postfixes, in appearance order
    pub fn postfixes(&self) -> Vec<String> {
        self.attributes(POSTFIX_TAG)
    }

    pub fn len(&self) -> usize {
        self.labels().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Are any wrap buttons configured?
    pub fn is_configured(&self) -> bool {
        !self.is_empty()
    }

    /// All segments between the given tag pair, in appearance order
    fn attributes(&self, tag: &str) -> Vec<String> {
        if self.serialized.is_empty() {
            return Vec::new();
        }
        let open = open_tag(tag);
        let close = close_tag(tag);

        self.serialized
            .split(open.as_str())
            .skip(1)
            .map(|fragment| {
                fragment
                    .split(close.as_str())
                    .next()
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }
}

fn open_tag(tag: &str) -> String {
    format!("##{}##", tag)
}

fn close_tag(tag: &str) -> String {
    format!("##/{}##", tag)
}

fn render_button_config(label: &str, prefix: &str, postfix: &str) -> String {
    let mut config = String::from(BUTTON_OPEN);
    config.push_str(&format!("{}{}{}", open_tag(LABEL_TAG), label, close_tag(LABEL_TAG)));
    config.push_str(&format!("{}{}{}", open_tag(PREFIX_TAG), prefix, close_tag(PREFIX_TAG)));
    config.push_str(&format!(
        "{}{}{}",
        open_tag(POSTFIX_TAG),
        postfix,
        close_tag(POSTFIX_TAG)
    ));
    config.push_str(BUTTON_CLOSE);

    config
}
