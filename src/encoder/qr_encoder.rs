//! Main QR encoder - wires the pipeline together

use tracing::debug;

use crate::encoder::bitstream::{codewords_to_bits, flatten};
use crate::encoder::codewords::{CodewordAssembler, MODE_INDICATOR_BITS};
use crate::encoder::config::EncoderConfig;
use crate::encoder::modes::encode_segment;
use crate::encoder::placement::{Cursor, ZigzagPlacer};
use crate::encoder::structure::structured_matrix;
use crate::encoder::tables::{EncodingTables, standard_tables};
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern, Mode, ModuleMatrix, QRCode, Version};

/// Encodes text into a version 1 symbol
pub struct QrEncoder<'t> {
    version: Version,
    config: EncoderConfig,
    tables: &'t EncodingTables,
}

impl QrEncoder<'static> {
    /// Version 1 encoder using the process-wide tables
    pub fn new(config: EncoderConfig) -> Self {
        Self::with_tables(config, standard_tables())
    }

    /// Validate a full construction request
    ///
    /// Fails with `InvalidSizeOrVersion` unless size is 21 and version is 1,
    /// and with `InvalidMask` for mask identifiers above 7.
    pub fn with_size(
        size: usize,
        version: u8,
        mode: Mode,
        ec_level: ECLevel,
        mask_id: u8,
    ) -> Result<Self> {
        let version = Version::from_size(size, version)?;
        let mask = MaskPattern::from_id(mask_id)?;
        Ok(Self {
            version,
            config: EncoderConfig::new(mode, ec_level, mask),
            tables: standard_tables(),
        })
    }
}

impl<'t> QrEncoder<'t> {
    /// Version 1 encoder with caller-supplied tables
    pub fn with_tables(config: EncoderConfig, tables: &'t EncodingTables) -> Self {
        Self {
            version: Version::V1,
            config,
            tables,
        }
    }

    /// Settings used by `encode`
    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Symbol version (always 1)
    pub fn version(&self) -> Version {
        self.version
    }

    /// Run the whole pipeline on `text`
    pub fn encode(&self, text: &str) -> Result<QRCode> {
        let EncoderConfig {
            mode,
            ec_level,
            mask,
        } = self.config;

        let groups = encode_segment(text, mode, self.tables)?;
        let data_bits = flatten(&groups);
        debug!(?mode, chars = text.chars().count(), data_bits = data_bits.len(), "encoded segment");

        let codewords = CodewordAssembler::new(self.tables).assemble(
            &data_bits,
            mode,
            text.chars().count(),
            ec_level,
        )?;

        let mut matrix = structured_matrix(self.version.size(), mode, ec_level, mask);
        let end = self.place_codewords(&mut matrix, &codewords)?;

        debug!(
            ?ec_level,
            mask = mask.id(),
            codewords = codewords.len(),
            ?end,
            dark = matrix.dark_count(),
            "symbol complete"
        );

        Ok(QRCode::new(
            self.version,
            mode,
            ec_level,
            mask,
            codewords,
            matrix,
        ))
    }

    /// Place the codeword stream after the 4-bit mode indicator, which the
    /// mode area already represents: count bits first, then one codeword's
    /// worth of bits per call
    pub(crate) fn place_codewords(
        &self,
        matrix: &mut ModuleMatrix,
        codewords: &[u8],
    ) -> Result<Cursor> {
        let stream = codewords_to_bits(codewords);
        let count_width = self.tables.char_count_bits(self.config.mode);
        let header_len = (MODE_INDICATOR_BITS + count_width).min(stream.len());
        let count_bits = &stream[MODE_INDICATOR_BITS.min(header_len)..header_len];
        let body = &stream[header_len..];

        let start = Cursor::after_mode_area(matrix.size());
        let mut placer = ZigzagPlacer::new(matrix, self.config.mask);
        let mut cursor = placer.place(start, count_bits)?;
        for chunk in body.chunks(8) {
            cursor = placer.place(cursor, chunk)?;
        }
        Ok(cursor)
    }
}
