use regex::Regex;
use crate::board::{Board, Cell};
use crate::error::Error;
use crate::pattern::Pattern;

/// Read a Life pattern from a RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
/// `#` comment lines before the header are skipped; the `x = .., y = ..`
/// header fixes the pattern's bounding box.
pub fn read(src: impl AsRef<str>) -> Result<Pattern, Error> {
  let header_re = Regex::new(r"^x = (\d+), y = (\d+)\b").unwrap();
  let mut src = src.as_ref().trim_start();

  while src.starts_with('#') {
    match src.find('\n') {
      Some(i) => src = src[i + 1..].trim_start(),
      None => return Err(Error::InvalidRle("missing header line".into())),
    }
  }

  let caps = header_re
    .captures(src)
    .ok_or_else(|| Error::InvalidRle("missing header line".into()))?;
  let width: usize = caps[1].parse()
    .map_err(|_| Error::InvalidRle("invalid width".into()))?;
  let height: usize = caps[2].parse()
    .map_err(|_| Error::InvalidRle("invalid height".into()))?;
  if width == 0 || height == 0 {
    return Err(Error::InvalidRle("empty bounding box".into()));
  }

  src = &src[src.find('\n').map(|i| i + 1).unwrap_or_else(|| src.len())..];

  let mut cells = vec![Cell::Dead; width * height];
  let mut x = 0;
  let mut y = 0;
  loop {
    src = src.trim_start();
    if src.is_empty() {
      return Err(Error::InvalidRle("unexpected EOF".into()));
    }

    let b0 = src.as_bytes()[0];
    if b0 == b'!' {
      break;
    }

    let mut num = 1;
    if b0.is_ascii_digit() {
      let num_len = src.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| src.len());
      num = src[..num_len].parse()
        .map_err(|_| Error::InvalidRle("invalid run count".into()))?;
      src = &src[num_len..];
      if src.is_empty() {
        return Err(Error::InvalidRle("unexpected EOF".into()));
      }
    }

    // `x == width` and `y == height` are the end-of-row/end-of-pattern
    // positions; only runs reaching past them leave the bounding box
    match src.as_bytes()[0] {
      b'b' => {
        if x + num > width {
          return Err(Error::InvalidRle(format!(
            "dead run outside the {}x{} bounding box", width, height
          )));
        }
        x += num;
      }
      b'o' => {
        if y >= height || x + num > width {
          return Err(Error::InvalidRle(format!(
            "cell run outside the {}x{} bounding box", width, height
          )));
        }
        for i in 0..num {
          cells[y * width + x + i] = Cell::Alive;
        }
        x += num;
      }
      b'$' => {
        if y + num > height {
          return Err(Error::InvalidRle(format!(
            "row skip outside the {}x{} bounding box", width, height
          )));
        }
        x = 0;
        y += num;
      }
      c => {
        return Err(Error::InvalidRle(format!("invalid character {:?}", c as char)));
      }
    }

    src = &src[1..];
  }

  Ok(Pattern::from_cells(width, height, cells))
}

/// Write a board to a RLE string.
///
/// The bounding box is the whole board. Trailing dead runs and trailing
/// empty rows are elided; lines wrap at 70 columns.
pub fn write(board: &Board) -> String {
  let mut output = format!(
    "x = {}, y = {}, rule = B3/S23\n", board.width(), board.height());

  let mut num_consec_next_rows = 0;
  for y in 0..board.height() {
    let mut runs: Vec<(RleUnit, usize)> = vec![];
    for x in 0..board.width() {
      let unit = if board.get(x as i64, y as i64).is_alive() {
        RleUnit::Alive
      } else {
        RleUnit::Dead
      };
      match runs.last_mut() {
        Some((last, num)) if *last == unit => *num += 1,
        _ => runs.push((unit, 1)),
      }
    }
    if let Some((RleUnit::Dead, _)) = runs.last() {
      runs.pop();
    }

    if runs.is_empty() {
      num_consec_next_rows += 1;
      continue;
    }

    if num_consec_next_rows > 0 {
      RleUnit::NextRow.write(num_consec_next_rows, &mut output);
    }
    for (unit, num) in runs {
      unit.write(num, &mut output);
    }
    num_consec_next_rows = 1;
  }

  output.push('!');
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
}

impl RleUnit {
  fn write(self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    // the header always contains a newline
    if s.len() - s.rfind('\n').unwrap() + buf.len() > 71 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}
