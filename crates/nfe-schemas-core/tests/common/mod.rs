#![allow(dead_code)]

pub mod portal_server;

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Portal page with an official section listing `hrefs` and a test section
/// listing one homologation link that must never be followed.
pub fn portal_html(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|h| format!("      <li><a href=\"{}\">bundle</a></li>\n", h))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
  <div id="conteudo">
    <p class="tituloSessao">VERSÕES OFICIAIS (em uso)</p>
    <ul>
{items}    </ul>
    <p class="tituloSessao">VERSÕES PARA TESTES (Homologação)</p>
    <ul>
      <li><a href="exibirArquivo.aspx?conteudo=homolog">homologação</a></li>
    </ul>
  </div>
</body>
</html>"#
    )
}

/// Builds an in-memory ZIP containing `files` (name, content).
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in files {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
