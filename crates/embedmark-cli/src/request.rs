//! The interactive question sequence

use std::io::{BufRead, Write};
use std::path::PathBuf;

use embedmark_core::validation::{
    is_content_path, is_dir, is_embed_path, is_float, is_greater_than_zero,
    is_horizontal_position, is_numeric, is_vertical_position, text_to_content_paths,
    text_to_dir_path, text_to_file_path, text_to_float, text_to_horizontal_corner, text_to_int,
    text_to_vertical_corner,
};
use embedmark_core::{EmbedSpec, Placement};

use crate::prompt::{PromptError, Prompter};

/// Everything the user answered, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedRequest {
    pub content_paths: Vec<PathBuf>,
    pub spec: EmbedSpec,
    pub output_dir: PathBuf,
}

/// Ask every question in order.
pub fn collect_request<R, W>(prompter: &mut Prompter<R, W>) -> Result<EmbedRequest, PromptError>
where
    R: BufRead,
    W: Write,
{
    let content_paths = prompter.ask(
        "content directory/file: ",
        &[is_content_path],
        text_to_content_paths,
    )?;

    let embed_path = prompter.ask("embed file: ", &[is_embed_path], text_to_file_path)?;

    let output_dir = prompter.ask("output directory: ", &[is_dir], text_to_dir_path)?;

    let horizontal = prompter.ask(
        "embed horizontal position (left/right): ",
        &[is_horizontal_position],
        text_to_horizontal_corner,
    )?;

    let vertical = prompter.ask(
        "embed vertical position (top/bottom): ",
        &[is_vertical_position],
        text_to_vertical_corner,
    )?;

    let margin = prompter.ask("embed margin: ", &[is_numeric], text_to_int)?;

    let scale = prompter.ask(
        "embed scale: ",
        &[is_float, is_greater_than_zero],
        text_to_float,
    )?;

    Ok(EmbedRequest {
        content_paths,
        spec: EmbedSpec::new(
            embed_path,
            Placement::new(horizontal, vertical, margin),
            scale,
        ),
        output_dir,
    })
}
