// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;
use std::io;

/// Destination for encoded bytes.
///
/// Encoders write to the sink synchronously and in emission order. A sink may
/// fail; the failure aborts the current encode call and bytes that were
/// already accepted stay written.
pub trait Sink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error>;

    #[inline(always)]
    fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.write_bytes(&[value])
    }
}

/// Growable in-memory buffer. Writes never fail.
#[derive(Default)]
pub struct Writer {
    pub(crate) bf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            bf: Vec::with_capacity(capacity),
        }
    }

    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }
}

impl Sink for Writer {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.bf.extend_from_slice(bytes);
        Ok(())
    }

    #[inline(always)]
    fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.bf.push(value);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    #[inline(always)]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
///
/// Writes go straight to the underlying writer, so a failed encode leaves a
/// prefix of the output behind. Encode into a [`Writer`] first when the
/// destination must only ever see complete values.
pub struct IoSink<W: io::Write> {
    inner: W,
    written: usize,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        IoSink { inner, written: 0 }
    }

    /// Number of bytes accepted by the underlying writer so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}
