// Reserved marker characters shared by the aligner and the rule system

/// Gap marker inserted by alignment where one side has no character.
///
/// Gaps exist only inside alignments and are stripped before any rule
/// pattern is stored or applied.
pub const GAP: char = '_';

/// Word-start anchor prepended to prefix rule patterns and to the working
/// string during rule application.
pub const WORD_START: char = '<';

/// Word-end anchor appended to suffix rule patterns and to the working
/// string during rule application.
pub const WORD_END: char = '>';

/// True for the two boundary anchors (`<`, `>`).
///
/// Input lemmas and forms must not contain any reserved character; this is
/// a documented precondition of the whole toolkit, not a runtime check.
pub fn is_boundary(c: char) -> bool {
    c == WORD_START || c == WORD_END
}
